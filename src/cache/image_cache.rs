use std::path::{Path, PathBuf};

use crate::api::fetch_image;
use crate::error::ImageResult;

/// Persistent cache for cuisine images
/// Stores images as files in the cache directory, one file per URL
pub struct ImageCache {
    cache_dir: PathBuf,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    /// Create a cache in the platform cache directory
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cuisine_explorer")
            .join("images");
        Self::with_dir(cache_dir)
    }

    /// Create a cache rooted at `cache_dir`
    pub fn with_dir<P: Into<PathBuf>>(cache_dir: P) -> Self {
        let cache_dir = cache_dir.into();

        // Create directory if needed
        if let Err(e) = std::fs::create_dir_all(&cache_dir) {
            log::warn!("Failed to create image cache directory: {}", e);
        }

        log::debug!("Image cache directory: {:?}", cache_dir);
        Self { cache_dir }
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// File name for a URL: first 16 hex digits of its blake3 hash plus the image extension
    fn filename(url: &str) -> String {
        format!(
            "{}.{}",
            &blake3::hash(url.as_bytes()).to_hex()[..16],
            Self::extension(url)
        )
    }

    fn extension(url: &str) -> &'static str {
        let path = url.split(['?', '#']).next().unwrap_or(url).to_lowercase();
        if path.ends_with(".png") {
            "png"
        } else if path.ends_with(".webp") {
            "webp"
        } else if path.ends_with(".gif") {
            "gif"
        } else {
            "jpg"
        }
    }

    fn path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(Self::filename(url))
    }

    /// Check if an image is cached
    #[allow(dead_code)]
    fn contains(&self, url: &str) -> bool {
        self.path(url).exists()
    }

    /// Get a cached image
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        match std::fs::read(self.path(url)) {
            Ok(bytes) => {
                log::info!("Image cache hit for {}", url);
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Store an image in the cache
    pub fn insert(&self, url: &str, bytes: &[u8]) {
        if let Err(e) = std::fs::write(self.path(url), bytes) {
            log::warn!("Failed to cache image: {}", e);
        } else {
            log::debug!("Cached image for {}", url);
        }
    }
}

/// Fetch an image, checking cache first
pub fn fetch_image_cached(cache: &ImageCache, url: &str) -> ImageResult<Vec<u8>> {
    if let Some(bytes) = cache.get(url) {
        return Ok(bytes);
    }

    log::info!("Image cache miss for {}, downloading", url);
    let bytes = fetch_image(url)?;
    cache.insert(url, &bytes);

    Ok(bytes)
}
