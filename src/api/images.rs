use crate::error::{ImageError, ImageResult};

const USER_AGENT: &str = "Cuisine-Explorer/1.0";

/// Download the raw bytes behind an image URL
pub fn fetch_image(url: &str) -> ImageResult<Vec<u8>> {
    log::debug!("Fetching image: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    if response.status().is_success() {
        Ok(response.bytes()?.to_vec())
    } else {
        Err(ImageError::HttpStatus(response.status()))
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
