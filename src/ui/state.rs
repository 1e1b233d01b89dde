use crate::config::AppConfig;
use crate::filter::FilterSpec;
use crate::io::read_cuisines;
use crate::models::CuisineTable;
use crate::query::evaluate;
use crate::sort::SortField;
use crate::wishlist::{AddOutcome, WishList};

use super::images::ImageLoader;

/// Lifecycle of one browsing session
pub enum Session {
    Browsing(Box<BrowserState>),
    /// The data file could not be loaded; nothing else happens this session
    LoadFailed(String),
}

impl Session {
    /// Load the configured data file and open a session on it
    pub fn start(config: &AppConfig) -> Self {
        match read_cuisines(&config.data_path) {
            Ok(table) => Session::Browsing(Box::new(BrowserState::new(table, config))),
            Err(e) => {
                log::error!("Failed to load {}: {}", config.data_path.display(), e);
                Session::LoadFailed(format!("An error occurred while loading the data: {e}"))
            }
        }
    }
}

/// Confirmation shown after a wish list action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub added: bool,
}

pub struct BrowserState {
    pub table: CuisineTable,
    pub region_options: Vec<String>,
    pub price_bounds: (u32, u32),
    /// Values of the sidebar controls; only used once "Apply Filters" is pressed
    pub filter: FilterSpec,
    pub sort_field: SortField,
    /// Positions into the table; None until filters have been applied
    pub results: Option<Vec<usize>>,
    pub wish_list: WishList,
    pub notice: Option<Notice>,
    pub show_wish_list: bool,
    pub images: Option<ImageLoader>,
}

impl BrowserState {
    pub fn new(table: CuisineTable, config: &AppConfig) -> Self {
        Self {
            region_options: table.regions(),
            price_bounds: table.price_bounds().unwrap_or((0, 0)),
            filter: config.initial_filter(&table),
            sort_field: config.sort_field,
            results: None,
            wish_list: WishList::new(),
            notice: None,
            show_wish_list: false,
            images: None,
            table,
        }
    }

    pub fn with_images(mut self, images: ImageLoader) -> Self {
        self.images = Some(images);
        self
    }

    /// Run the filter and sort with the current control values
    pub fn apply_filters(&mut self) {
        let results = evaluate(&self.table, &self.filter, self.sort_field);
        log::info!(
            "Applied filters: {} of {} cuisines match",
            results.len(),
            self.table.len()
        );
        self.results = Some(results);
    }

    /// Add the cuisine at table position `index` to the wish list
    pub fn add_to_wish_list(&mut self, index: usize) {
        let Some(record) = self.table.get(index) else {
            return;
        };
        let name = record.name.clone();
        self.notice = Some(match self.wish_list.add(&name) {
            AddOutcome::Added => Notice {
                text: format!("{name} added to your Wish List!"),
                added: true,
            },
            AddOutcome::AlreadyPresent => Notice {
                text: format!("{name} is already on your Wish List."),
                added: false,
            },
        });
    }

    /// Keep the price range ordered after a slider moved
    pub fn clamp_price_range(&mut self) {
        let (lo, hi) = self.price_bounds;
        self.filter.min_price = self.filter.min_price.clamp(lo, hi);
        self.filter.max_price = self.filter.max_price.clamp(lo, hi);
        if self.filter.min_price > self.filter.max_price {
            self.filter.max_price = self.filter.min_price;
        }
    }

    pub fn toggle_region(&mut self, region: &str, selected: bool) {
        if selected {
            self.filter.regions.insert(region.to_string());
        } else {
            self.filter.regions.remove(region);
        }
    }
}
