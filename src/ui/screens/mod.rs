mod browser;
mod load_failed;

pub use browser::BrowserScreen;
pub use load_failed::LoadFailedScreen;
