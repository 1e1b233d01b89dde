use std::path::PathBuf;

use crate::filter::FilterSpec;
use crate::models::{CuisineTable, MAX_RATING};
use crate::sort::SortField;

pub const DEFAULT_DATA_FILE: &str = "local_cuisines_data.xlsx";

/// Start-up settings, filled from the command line by the binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    /// Overrides the platform cache directory for downloaded images
    pub image_cache_dir: Option<PathBuf>,
    pub load_images: bool,
    pub min_rating: u8,
    pub specialty_query: String,
    pub sort_field: SortField,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            image_cache_dir: None,
            load_images: true,
            min_rating: MAX_RATING,
            specialty_query: String::new(),
            sort_field: SortField::default(),
        }
    }
}

impl AppConfig {
    /// The table's default filter with the configured rating and search text
    pub fn initial_filter(&self, table: &CuisineTable) -> FilterSpec {
        let mut spec = table.default_filter();
        spec.min_rating = self.min_rating;
        spec.specialty_query = self.specialty_query.clone();
        spec
    }
}
