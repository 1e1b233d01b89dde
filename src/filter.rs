//! Record filtering.
//!
//! A record passes when all four criteria of a [`FilterSpec`] hold at once:
//! its region is selected, its price lies inside the inclusive range, its
//! rating reaches the threshold and, when a search text is given, its
//! specialty contains that text ignoring case.

use std::collections::BTreeSet;

use crate::models::CuisineRecord;

/// The criteria of one filter evaluation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub regions: BTreeSet<String>,
    pub min_price: u32,
    pub max_price: u32,
    pub min_rating: u8,
    pub specialty_query: String,
}

impl FilterSpec {
    /// Returns true if the record satisfies every criterion
    pub fn matches(&self, record: &CuisineRecord) -> bool {
        self.regions.contains(&record.region)
            && (self.min_price..=self.max_price).contains(&record.price)
            && record.rating >= self.min_rating
            && self.specialty_matches(record.specialty.as_deref())
    }

    fn specialty_matches(&self, specialty: Option<&str>) -> bool {
        if self.specialty_query.is_empty() {
            return true;
        }
        // A missing specialty never matches a non-empty search
        match specialty {
            Some(text) => text
                .to_lowercase()
                .contains(&self.specialty_query.to_lowercase()),
            None => false,
        }
    }
}

/// Keep the records matching `spec`, in their original order
pub fn filter<'a>(records: &'a [CuisineRecord], spec: &FilterSpec) -> Vec<&'a CuisineRecord> {
    records.iter().filter(|r| spec.matches(r)).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
