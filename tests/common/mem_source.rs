//! In-memory image source so end-to-end runs need no files on disk.
use lbp_classifier::image::{GrayImageU8, ImageSource};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves decoded images from a map keyed by dataset path.
#[derive(Default)]
pub struct MemoryImageSource {
    images: HashMap<PathBuf, GrayImageU8>,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, width: usize, height: usize, data: Vec<u8>) {
        self.images
            .insert(PathBuf::from(path), GrayImageU8::new(width, height, data));
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, path: &Path) -> Result<GrayImageU8, String> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no in-memory image at {}", path.display()))
    }
}
