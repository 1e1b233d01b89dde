//! HTTP client for remote cuisine images

pub mod images;

pub use images::fetch_image;
