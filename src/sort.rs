use crate::models::CuisineRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// Field a result list can be ordered by. Ordering is always ascending.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortField {
    #[default]
    Price,
    Rating,
    Name,
}

impl SortField {
    /// Column label as shown in the data file and the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Price => "Price Range",
            SortField::Rating => "Star Rating",
            SortField::Name => "Cuisine Name",
        }
    }

    pub fn all() -> &'static [SortField] {
        &[SortField::Price, SortField::Rating, SortField::Name]
    }

    /// Names compare byte-wise, so "Zucchini" sorts before "apple"
    pub fn compare(&self, a: &CuisineRecord, b: &CuisineRecord) -> Ordering {
        match self {
            SortField::Price => a.price.cmp(&b.price),
            SortField::Rating => a.rating.cmp(&b.rating),
            SortField::Name => a.name.cmp(&b.name),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts the short names "price", "rating", "name" or the column labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortField::all()
            .iter()
            .copied()
            .find(|f| {
                wanted == f.label().to_lowercase() || wanted == format!("{:?}", f).to_lowercase()
            })
            .ok_or_else(|| format!("unknown sort field '{s}' (expected price, rating or name)"))
    }
}

/// Order records ascending by `field`. Equal keys keep their input order.
pub fn sort(mut subset: Vec<&CuisineRecord>, field: SortField) -> Vec<&CuisineRecord> {
    // sort_by is stable
    subset.sort_by(|a, b| field.compare(a, b));
    subset
}
