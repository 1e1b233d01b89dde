use crate::formatters::format_wish_list;
use crate::wishlist::WishList;
use eframe::egui;

/// Read-only window listing the session's wish list
pub struct WishListWindow<'a> {
    pub wish_list: &'a WishList,
    pub show: &'a mut bool,
}

impl<'a> WishListWindow<'a> {
    pub fn new(wish_list: &'a WishList, show: &'a mut bool) -> Self {
        Self { wish_list, show }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let mut open = *self.show;
        let mut close_clicked = false;

        egui::Window::new(format!("Wish List ({})", self.wish_list.len()))
            .id(egui::Id::new("wish_list_window"))
            .open(&mut open)
            .default_size([320.0, 240.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format_wish_list(self.wish_list))
                                .text_style(egui::TextStyle::Monospace),
                        );
                    });

                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        *self.show = open && !close_clicked;
    }
}
