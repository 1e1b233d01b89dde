use eframe::{self, egui};
use egui::ViewportBuilder;

use crate::cache::ImageCache;
use crate::config::AppConfig;

use super::{
    images::ImageLoader,
    screens::{BrowserScreen, LoadFailedScreen},
    state::Session,
};

pub struct CuisineExplorerApp {
    session: Session,
}

impl CuisineExplorerApp {
    pub fn new(config: &AppConfig) -> Self {
        let session = match Session::start(config) {
            Session::Browsing(state) if config.load_images => {
                let cache = match &config.image_cache_dir {
                    Some(dir) => ImageCache::with_dir(dir),
                    None => ImageCache::new(),
                };
                match ImageLoader::new(cache) {
                    Ok(images) => Session::Browsing(Box::new(state.with_images(images))),
                    Err(e) => {
                        log::warn!("Image loading disabled, could not start runtime: {}", e);
                        Session::Browsing(state)
                    }
                }
            }
            other => other,
        };
        Self { session }
    }
}

impl eframe::App for CuisineExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match &mut self.session {
            Session::Browsing(state) => BrowserScreen::show(ctx, state),
            Session::LoadFailed(message) => LoadFailedScreen::show(ctx, message),
        }
    }
}

pub fn launch_gui(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("Local Cuisines - Explore the Flavors of the World"),
        ..Default::default()
    };

    eframe::run_native(
        "Local Cuisines",
        options,
        Box::new(move |_cc| Ok(Box::new(CuisineExplorerApp::new(&config)))),
    )
}
