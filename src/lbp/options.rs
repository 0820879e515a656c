//! Parameters of the LBP descriptor extraction.
use serde::{Deserialize, Serialize};

/// Sampling parameters for the circular LBP operator and the histogram scan.
///
/// Defaults match the common 8-point, radius-1 configuration with a
/// 3-pixel subsampling stride on both axes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LbpOptions {
    /// Number of sampling points on the circle (histogram has `2^points` bins).
    pub points: u32,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Scan step in pixels, applied to both axes.
    pub stride: usize,
}

impl Default for LbpOptions {
    fn default() -> Self {
        Self {
            points: 8,
            radius: 1.0,
            stride: 3,
        }
    }
}

impl LbpOptions {
    /// Number of histogram bins, `2^points`.
    pub fn histogram_len(&self) -> usize {
        1usize << self.points
    }

    /// Pixels excluded from every image edge so all circle samples stay
    /// in-bounds.
    pub fn margin(&self) -> usize {
        self.radius.ceil() as usize
    }

    /// Panics when a field is outside its valid domain.
    pub fn validate(&self) {
        assert!(
            self.points >= 1 && self.points <= 30,
            "LBP points must be in [1, 30], got {}",
            self.points
        );
        assert!(
            self.radius.is_finite() && self.radius > 0.0,
            "LBP radius must be positive and finite, got {}",
            self.radius
        );
        assert!(self.stride >= 1, "LBP stride must be at least 1");
    }
}
