//! Train/test orchestration for the texture classifier.
//!
//! [`TextureClassifier`] drives both passes over a dataset: training decodes
//! each image, extracts its LBP descriptor, and stores it with its label in a
//! [`TrainingIndex`]; evaluation extracts the descriptor of each test image,
//! finds its nearest training neighbor, and tallies per-class correctness.
//!
//! Typical usage:
//! ```no_run
//! use lbp_classifier::dataset::{load_dataset, ListFormat};
//! use lbp_classifier::image::FsImageSource;
//! use lbp_classifier::{ClassifierParams, TextureClassifier};
//!
//! # fn example() -> Result<(), String> {
//! let classifier = TextureClassifier::new(ClassifierParams::default());
//! let (train, _) = load_dataset("train.txt".as_ref(), ListFormat::Lenient)?;
//! let (test, _) = load_dataset("test.txt".as_ref(), ListFormat::Lenient)?;
//! let outcome = classifier.train(&FsImageSource, &train)?;
//! let report = classifier.evaluate(&FsImageSource, &outcome.index, &test)?;
//! if let Some(accuracy) = report.overall_accuracy() {
//!     println!("accuracy: {accuracy:.6}");
//! }
//! # Ok(())
//! # }
//! ```

use super::index::TrainingIndex;
use super::options::{ClassifierParams, DecodePolicy, DegeneratePolicy};
use crate::dataset::Sample;
use crate::diagnostics::{EvaluationReport, NoProgress, Phase, ProgressObserver, TrainSummary};
use crate::image::ImageSource;
use crate::lbp::{compute_descriptor, Descriptor};
use crate::matcher::nearest_neighbor;
use log::warn;
use std::path::Path;
use std::time::Instant;

/// Texture classifier pairing LBP descriptor extraction with a
/// nearest-neighbor match over labeled training descriptors.
pub struct TextureClassifier {
    params: ClassifierParams,
}

/// Training index plus the counters describing how it was built.
#[derive(Debug)]
pub struct TrainOutcome {
    pub index: TrainingIndex,
    pub summary: TrainSummary,
}

enum SampleOutcome {
    Extracted(Descriptor),
    DecodeFailed(String),
    Degenerate,
}

impl TextureClassifier {
    /// Create a classifier with the supplied parameters.
    pub fn new(params: ClassifierParams) -> Self {
        params.validate();
        Self { params }
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Build a training index from `dataset`, preserving dataset order.
    pub fn train<S: ImageSource>(
        &self,
        source: &S,
        dataset: &[Sample],
    ) -> Result<TrainOutcome, String> {
        self.train_with_progress(source, dataset, &mut NoProgress)
    }

    /// [`train`](Self::train) with a per-sample progress callback.
    pub fn train_with_progress<S: ImageSource>(
        &self,
        source: &S,
        dataset: &[Sample],
        observer: &mut dyn ProgressObserver,
    ) -> Result<TrainOutcome, String> {
        let start = Instant::now();
        let mut index = TrainingIndex::with_capacity(dataset.len());
        let mut decode_failures = 0u64;
        let mut degenerate = 0u64;
        for (i, sample) in dataset.iter().enumerate() {
            observer.on_sample(Phase::Train, i, dataset.len());
            let outcome = self.extract(source, sample);
            if let Some(descriptor) =
                self.resolve(outcome, &sample.path, &mut decode_failures, &mut degenerate)?
            {
                index.push(descriptor, sample.label);
            }
        }
        let summary = TrainSummary {
            indexed: index.len(),
            decode_failures,
            degenerate_histograms: degenerate,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        log::debug!(
            "indexed {} of {} training samples in {:.1} ms",
            summary.indexed,
            dataset.len(),
            summary.elapsed_ms
        );
        Ok(TrainOutcome { index, summary })
    }

    /// Classify every test sample against `index` and tally accuracy.
    ///
    /// The index must be non-empty; every true label must lie inside the
    /// configured class range.
    pub fn evaluate<S: ImageSource>(
        &self,
        source: &S,
        index: &TrainingIndex,
        dataset: &[Sample],
    ) -> Result<EvaluationReport, String> {
        self.evaluate_with_progress(source, index, dataset, &mut NoProgress)
    }

    /// [`evaluate`](Self::evaluate) with a per-sample progress callback.
    pub fn evaluate_with_progress<S: ImageSource>(
        &self,
        source: &S,
        index: &TrainingIndex,
        dataset: &[Sample],
        observer: &mut dyn ProgressObserver,
    ) -> Result<EvaluationReport, String> {
        assert!(
            !index.is_empty(),
            "evaluation requires a non-empty training index"
        );
        let start = Instant::now();
        let mut report = EvaluationReport::new(self.params.classes);
        for (i, sample) in dataset.iter().enumerate() {
            observer.on_sample(Phase::Test, i, dataset.len());
            let outcome = self.extract(source, sample);
            if let Some(descriptor) = self.resolve(
                outcome,
                &sample.path,
                &mut report.decode_failures,
                &mut report.degenerate_histograms,
            )? {
                let found = nearest_neighbor(&descriptor, index);
                let predicted = index.label(found.index);
                report.record(sample.label, predicted == sample.label);
            }
        }
        report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(report)
    }

    fn extract<S: ImageSource>(&self, source: &S, sample: &Sample) -> SampleOutcome {
        match source.load(&sample.path) {
            Err(reason) => SampleOutcome::DecodeFailed(reason),
            Ok(image) => match compute_descriptor(&image.as_view(), &self.params.lbp) {
                Some(descriptor) => SampleOutcome::Extracted(descriptor),
                None => SampleOutcome::Degenerate,
            },
        }
    }

    fn resolve(
        &self,
        outcome: SampleOutcome,
        path: &Path,
        decode_failures: &mut u64,
        degenerate: &mut u64,
    ) -> Result<Option<Descriptor>, String> {
        match outcome {
            SampleOutcome::Extracted(descriptor) => Ok(Some(descriptor)),
            SampleOutcome::DecodeFailed(reason) => {
                *decode_failures += 1;
                match self.params.decode_policy {
                    DecodePolicy::Skip => {
                        warn!("skipping {}: {reason}", path.display());
                        Ok(None)
                    }
                    DecodePolicy::Abort => Err(reason),
                }
            }
            SampleOutcome::Degenerate => {
                *degenerate += 1;
                warn!(
                    "{} is too small for the configured LBP margin",
                    path.display()
                );
                match self.params.degenerate_policy {
                    DegeneratePolicy::Skip => Ok(None),
                    DegeneratePolicy::ZeroFill => {
                        Ok(Some(vec![0.0; self.params.lbp.histogram_len()]))
                    }
                }
            }
        }
    }
}

#[cfg(feature = "parallel")]
impl TextureClassifier {
    fn extract_batch<S: ImageSource + Sync>(
        &self,
        source: &S,
        dataset: &[Sample],
    ) -> Vec<SampleOutcome> {
        use rayon::prelude::*;

        dataset
            .par_iter()
            .map(|sample| self.extract(source, sample))
            .collect()
    }

    /// [`train`](Self::train) with descriptor extraction spread across
    /// threads. The collect keeps dataset order, so the resulting index is
    /// identical to the sequential one.
    pub fn train_parallel<S: ImageSource + Sync>(
        &self,
        source: &S,
        dataset: &[Sample],
    ) -> Result<TrainOutcome, String> {
        let start = Instant::now();
        let outcomes = self.extract_batch(source, dataset);
        let mut index = TrainingIndex::with_capacity(dataset.len());
        let mut decode_failures = 0u64;
        let mut degenerate = 0u64;
        for (sample, outcome) in dataset.iter().zip(outcomes) {
            if let Some(descriptor) =
                self.resolve(outcome, &sample.path, &mut decode_failures, &mut degenerate)?
            {
                index.push(descriptor, sample.label);
            }
        }
        let summary = TrainSummary {
            indexed: index.len(),
            decode_failures,
            degenerate_histograms: degenerate,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        Ok(TrainOutcome { index, summary })
    }

    /// [`evaluate`](Self::evaluate) with descriptor extraction spread across
    /// threads. Matching and tallying stay sequential in dataset order.
    pub fn evaluate_parallel<S: ImageSource + Sync>(
        &self,
        source: &S,
        index: &TrainingIndex,
        dataset: &[Sample],
    ) -> Result<EvaluationReport, String> {
        assert!(
            !index.is_empty(),
            "evaluation requires a non-empty training index"
        );
        let start = Instant::now();
        let outcomes = self.extract_batch(source, dataset);
        let mut report = EvaluationReport::new(self.params.classes);
        for (sample, outcome) in dataset.iter().zip(outcomes) {
            if let Some(descriptor) = self.resolve(
                outcome,
                &sample.path,
                &mut report.decode_failures,
                &mut report.degenerate_histograms,
            )? {
                let found = nearest_neighbor(&descriptor, index);
                let predicted = index.label(found.index);
                report.record(sample.label, predicted == sample.label);
            }
        }
        report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(report)
    }
}
