use eframe::egui;

pub struct LoadFailedScreen;

impl LoadFailedScreen {
    pub fn show(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.heading("Unable to load cuisines");
                ui.add_space(20.0);
                ui.colored_label(ui.visuals().error_fg_color, message);
            });
        });
    }
}
