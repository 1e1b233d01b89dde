mod app;
mod components;
mod images;
mod screens;
mod state;

pub use app::launch_gui;
