pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatters;
pub mod io;
pub mod models;
pub mod query;
pub mod sort;
pub mod ui;
pub mod wishlist;

// Re-export commonly used items
pub use cache::{fetch_image_cached, ImageCache};
pub use config::AppConfig;
pub use error::{ImageError, ImageResult, LoadError};
pub use filter::{filter, FilterSpec};
pub use formatters::{format_results, format_wish_list};
pub use io::{read_cuisines, read_cuisines_from_reader, read_cuisines_from_workbook};
pub use models::{CuisineRecord, CuisineTable};
pub use query::evaluate;
pub use sort::{sort, SortField};
pub use wishlist::{AddOutcome, WishList};
