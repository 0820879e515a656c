//! Pluggable image loading.
//!
//! The classifier resolves dataset paths through an [`ImageSource`] so tests
//! can feed synthetic buffers without touching the filesystem.
use super::io::{load_grayscale_image, GrayImageU8};
use std::path::Path;

/// Resolves a dataset path to a decoded grayscale image.
pub trait ImageSource {
    /// Load and decode the image at `path` into 8-bit grayscale.
    fn load(&self, path: &Path) -> Result<GrayImageU8, String>;
}

/// Loads images from disk via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn load(&self, path: &Path) -> Result<GrayImageU8, String> {
        load_grayscale_image(path)
    }
}
