//! Per-sample progress callbacks for long train/test runs.

/// Which pass of the benchmark a sample belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Train,
    Test,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Train => "train",
            Phase::Test => "test",
        }
    }
}

/// Receives a callback before each sample is processed.
///
/// `index` is zero-based; `total` is the dataset length for the phase.
pub trait ProgressObserver {
    fn on_sample(&mut self, phase: Phase, index: usize, total: usize);
}

/// Observer that discards every callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_sample(&mut self, _phase: Phase, _index: usize, _total: usize) {}
}
