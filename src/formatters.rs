use crate::models::CuisineRecord;
use crate::wishlist::WishList;

pub const NO_RESULTS_MESSAGE: &str = "No cuisines match your criteria.";
pub const CURRENCY: &str = "₹";

pub fn format_price(price: u32) -> String {
    format!("{CURRENCY}{price}")
}

pub fn format_rating(rating: u8) -> String {
    if rating == 1 {
        "1 star".to_string()
    } else {
        format!("{rating} stars")
    }
}

/// Detail lines shown under a cuisine's name
pub fn format_cuisine_details(record: &CuisineRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Region", record.region.clone()),
        ("Ingredients", record.ingredients.clone()),
        ("Price Range", format_price(record.price)),
        ("Star Rating", format_rating(record.rating)),
        (
            "Specialty",
            record.specialty.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ]
}

/// Plain-text rendering of a result list
pub fn format_results(records: &[&CuisineRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Filtered Cuisines ({})\n", records.len()));
    output.push_str("-----------------------------------------------\n");

    for record in records {
        output.push_str(&format!("\n{}\n", record.name));
        for (label, value) in format_cuisine_details(record) {
            output.push_str(&format!("    {label}: {value}\n"));
        }
    }

    output
}

pub fn format_wish_list(list: &WishList) -> String {
    if list.is_empty() {
        return "Your Wish List is empty.".to_string();
    }
    list.names()
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
