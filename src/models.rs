use serde::Deserialize;
use std::collections::BTreeSet;

use crate::filter::FilterSpec;

/// Column headers every data file must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Cuisine Name",
    "Region",
    "Ingredients",
    "Price Range",
    "Star Rating",
    "Specialty",
    "Image URL",
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// One row exactly as it appears in the data file
#[derive(Debug, Deserialize, Clone)]
pub struct CuisineRow {
    #[serde(rename = "Cuisine Name")]
    pub name: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: String,
    #[serde(rename = "Price Range")]
    pub price: String,
    #[serde(rename = "Star Rating")]
    pub rating: String,
    #[serde(rename = "Specialty")]
    pub specialty: Option<String>,
    #[serde(rename = "Image URL")]
    pub image_url: Option<String>,
}

/// A validated cuisine entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineRecord {
    pub name: String,
    pub region: String,
    pub ingredients: String,
    pub price: u32,
    pub rating: u8,
    pub specialty: Option<String>,
    pub image_url: Option<String>,
}

impl CuisineRecord {
    /// Validate a raw row. The error message names the offending column.
    pub fn from_row(row: CuisineRow) -> Result<Self, String> {
        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err("Cuisine Name is empty".to_string());
        }

        let price = parse_whole_number(&row.price)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| format!("Price Range '{}' is not a non-negative integer", row.price))?;

        let rating = parse_whole_number(&row.rating)
            .and_then(|r| u8::try_from(r).ok())
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                format!(
                    "Star Rating '{}' must be an integer between {} and {}",
                    row.rating, MIN_RATING, MAX_RATING
                )
            })?;

        Ok(Self {
            name,
            region: row.region.trim().to_string(),
            ingredients: row.ingredients.trim().to_string(),
            price,
            rating,
            specialty: non_empty(row.specialty),
            image_url: non_empty(row.image_url),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse "300", "300.0" or "₹300" into a whole number.
/// Fractional values are rejected.
fn parse_whole_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim().trim_start_matches('₹').trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// All records of one data file, in file order
#[derive(Debug, Clone, Default)]
pub struct CuisineTable {
    records: Vec<CuisineRecord>,
}

impl CuisineTable {
    pub fn new(records: Vec<CuisineRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CuisineRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CuisineRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty regions, sorted
    pub fn regions(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .filter(|r| !r.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Smallest and largest price in the table
    pub fn price_bounds(&self) -> Option<(u32, u32)> {
        let min = self.records.iter().map(|r| r.price).min()?;
        let max = self.records.iter().map(|r| r.price).max()?;
        Some((min, max))
    }

    /// Filter settings shown before the user touches any control:
    /// every region, the full price range, five stars, no search text.
    pub fn default_filter(&self) -> FilterSpec {
        let (min_price, max_price) = self.price_bounds().unwrap_or((0, 0));
        FilterSpec {
            regions: self.regions().into_iter().collect(),
            min_price,
            max_price,
            min_rating: MAX_RATING,
            specialty_query: String::new(),
        }
    }
}
