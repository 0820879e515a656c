#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod image;
pub mod lbp;
pub mod matcher;

// --- High-level re-exports -------------------------------------------------

// Main entry points: classifier + results.
pub use crate::classifier::{
    ClassifierParams, DecodePolicy, DegeneratePolicy, TextureClassifier, TrainOutcome,
    TrainingIndex,
};
pub use crate::diagnostics::{ClassTally, EvaluationReport, TrainSummary};

// Descriptor extraction, usable on its own.
pub use crate::lbp::{compute_descriptor, lbp_code, Descriptor, LbpHistogram, LbpOptions};

// Nearest-neighbor lookup over a training index.
pub use crate::matcher::{nearest_neighbor, Match};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lbp_classifier::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let classifier = TextureClassifier::new(ClassifierParams::default());
/// let (train, _) = load_dataset("train.txt".as_ref(), ListFormat::Lenient)?;
/// let (test, _) = load_dataset("test.txt".as_ref(), ListFormat::Lenient)?;
/// let outcome = classifier.train(&FsImageSource, &train)?;
/// let report = classifier.evaluate(&FsImageSource, &outcome.index, &test)?;
/// for tally in &report.classes {
///     println!("Class {}: {}/{}", tally.class, tally.correct, tally.total);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::dataset::{load_dataset, ListFormat, Sample};
    pub use crate::image::FsImageSource;
    pub use crate::{ClassifierParams, EvaluationReport, LbpOptions, TextureClassifier};
}
