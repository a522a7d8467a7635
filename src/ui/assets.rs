use iced::widget::image::Handle;
use std::collections::HashMap;

use crate::preload::loader::LoadedImage;

/// Decoded images ready for the renderer, keyed by their URL
#[derive(Debug, Default)]
pub struct AssetCache {
    handles: HashMap<String, Handle>,
    /// URLs in the order they were first cached
    order: Vec<String>,
}

impl AssetCache {
    pub fn insert(&mut self, image: &LoadedImage) {
        log::debug!("Caching {}x{} image {}", image.width, image.height, image.url);
        let handle = Handle::from_bytes(image.bytes.clone());
        if self.handles.insert(image.url.clone(), handle).is_none() {
            self.order.push(image.url.clone());
        }
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        self.handles.get(url)
    }

    /// Handles for the given URLs that are cached, in the given order
    pub fn select<'a>(&'a self, urls: &'a [String]) -> impl Iterator<Item = &'a Handle> + 'a {
        urls.iter().filter_map(|url| self.handles.get(url))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
