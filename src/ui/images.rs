//! Background image loading for result cards.
//!
//! Downloads run on a tokio runtime, at most a few at a time, and hand the
//! bytes back over a channel. Textures are created on the UI thread when the
//! next frame polls the channel.

use crate::cache::{fetch_image_cached, ImageCache};
use crate::error::ImageResult;
use eframe::egui;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Semaphore;

const MAX_CONCURRENT_DOWNLOADS: usize = 4;

/// Message sent from background loader tasks
enum ImageMessage {
    Loaded { url: String, bytes: Vec<u8> },
    Failed { url: String },
}

pub struct ImageLoader {
    cache: Arc<ImageCache>,
    /// Texture handles keyed by image URL
    textures: HashMap<String, egui::TextureHandle>,
    loading: HashSet<String>,
    /// URLs that failed once; not retried this session
    failed: HashSet<String>,
    runtime: Runtime,
    sender: UnboundedSender<ImageMessage>,
    receiver: UnboundedReceiver<ImageMessage>,
    request_semaphore: Arc<Semaphore>,
}

impl ImageLoader {
    pub fn new(cache: ImageCache) -> std::io::Result<Self> {
        let (sender, receiver) = unbounded_channel();
        log::info!(
            "Loading images with up to {} downloads, cached in {}",
            MAX_CONCURRENT_DOWNLOADS,
            cache.cache_dir().display()
        );
        Ok(Self {
            cache: Arc::new(cache),
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            runtime: Runtime::new()?,
            sender,
            receiver,
            request_semaphore: Arc::new(Semaphore::new(MAX_CONCURRENT_DOWNLOADS)),
        })
    }

    pub fn loading_count(&self) -> usize {
        self.loading.len()
    }

    /// Texture for `url`, starting a download the first time it is asked for
    pub fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<&egui::TextureHandle> {
        if !self.textures.contains_key(url)
            && !self.loading.contains(url)
            && !self.failed.contains(url)
        {
            self.request(ctx, url);
        }
        self.textures.get(url)
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Drain finished downloads and turn them into textures (non-blocking)
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.receiver.try_recv() {
            match message {
                ImageMessage::Loaded { url, bytes } => {
                    self.loading.remove(&url);
                    match decode(&bytes) {
                        Ok(color_image) => {
                            let texture = ctx.load_texture(
                                format!("cuisine_{url}"),
                                color_image,
                                egui::TextureOptions::LINEAR,
                            );
                            self.textures.insert(url, texture);
                        }
                        Err(e) => {
                            warn!("Failed to decode image {}: {}", url, e);
                            self.failed.insert(url);
                        }
                    }
                }
                ImageMessage::Failed { url } => {
                    self.loading.remove(&url);
                    self.failed.insert(url);
                }
            }
        }

        if !self.loading.is_empty() {
            ctx.request_repaint();
        }
    }

    fn request(&mut self, ctx: &egui::Context, url: &str) {
        debug!("Queueing image download for {}", url);
        self.loading.insert(url.to_string());

        let url = url.to_string();
        let sender = self.sender.clone();
        let cache = Arc::clone(&self.cache);
        let semaphore = Arc::clone(&self.request_semaphore);
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            // Closed semaphore means the loader is shutting down
            let Ok(_permit) = semaphore.acquire().await else {
                return;
            };

            let fetch_url = url.clone();
            let result =
                tokio::task::spawn_blocking(move || fetch_image_cached(&cache, &fetch_url)).await;

            let message = match result {
                Ok(Ok(bytes)) => ImageMessage::Loaded { url, bytes },
                Ok(Err(e)) => {
                    warn!("Failed to fetch image {}: {}", url, e);
                    ImageMessage::Failed { url }
                }
                Err(e) => {
                    warn!("Image task for {} did not finish: {}", url, e);
                    ImageMessage::Failed { url }
                }
            };

            let _ = sender.send(message);
            ctx.request_repaint();
        });
    }
}

/// Decode encoded image bytes into an egui image
fn decode(bytes: &[u8]) -> ImageResult<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
