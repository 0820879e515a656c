//! Histogram accumulation and normalization over an image scan.
use super::code::lbp_code;
use super::options::LbpOptions;
use crate::image::ImageU8;

/// Normalized LBP histogram, length `2^points`.
pub type Descriptor = Vec<f64>;

/// Accumulates LBP codes over a subsampled image scan.
///
/// The scan keeps a `radius.ceil()` margin from every edge so each circle
/// sample stays in-bounds, and visits every `stride`-th pixel on both axes.
#[derive(Clone, Debug)]
pub struct LbpHistogram {
    bins: Vec<f64>,
    count: u64,
}

impl LbpHistogram {
    /// Empty histogram with `2^points` zeroed bins.
    pub fn new(options: &LbpOptions) -> Self {
        options.validate();
        LbpHistogram {
            bins: vec![0.0; options.histogram_len()],
            count: 0,
        }
    }

    /// Scans `image` and returns the accumulated histogram.
    ///
    /// Images smaller than `2 * margin + 1` in either dimension yield an
    /// empty scan; `normalized` reports that case as `None`.
    pub fn scan(image: &ImageU8, options: &LbpOptions) -> Self {
        let mut hist = Self::new(options);
        let margin = options.margin();
        let x_end = image.w.saturating_sub(margin);
        let y_end = image.h.saturating_sub(margin);
        for x in (margin..x_end).step_by(options.stride) {
            for y in (margin..y_end).step_by(options.stride) {
                hist.accumulate(lbp_code(image, x, y, options.points, options.radius));
            }
        }
        log::debug!(
            "LBP scan of {}x{} image sampled {} pixels",
            image.w,
            image.h,
            hist.count
        );
        hist
    }

    /// Adds one occurrence of `code`.
    pub fn accumulate(&mut self, code: u32) {
        let idx = code as usize;
        assert!(
            idx < self.bins.len(),
            "LBP code {code} does not fit a {}-bin histogram",
            self.bins.len()
        );
        self.bins[idx] += 1.0;
        self.count += 1;
    }

    /// Raw per-code counts.
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Number of pixels the scan visited.
    pub fn samples(&self) -> u64 {
        self.count
    }

    /// Sum over all bins, the L1 normalization denominator.
    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// L1-normalized histogram, or `None` when the scan visited no pixels.
    pub fn normalized(&self) -> Option<Descriptor> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        Some(self.bins.iter().map(|b| b / total).collect())
    }

    /// L1 normalization without the empty-scan guard.
    ///
    /// An empty scan divides zero by zero and fills the descriptor with NaN,
    /// matching classifiers that normalize unconditionally.
    pub fn normalized_lenient(&self) -> Descriptor {
        let total = self.total();
        self.bins.iter().map(|b| b / total).collect()
    }
}

/// Scans `image` and returns its normalized descriptor, or `None` when the
/// image is too small to sample.
pub fn compute_descriptor(image: &ImageU8, options: &LbpOptions) -> Option<Descriptor> {
    LbpHistogram::scan(image, options).normalized()
}
