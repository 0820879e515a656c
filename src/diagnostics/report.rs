//! Summary structures produced by training and evaluation runs.
use serde::{Deserialize, Serialize};

/// Correct/total counters for one class.
///
/// Counts are kept raw; division is deferred so an untested class reports
/// `None` instead of a fake ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTally {
    pub class: u32,
    pub correct: u64,
    pub total: u64,
}

impl ClassTally {
    /// Fraction of correct predictions, or `None` when nothing was tested.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.correct as f64 / self.total as f64)
    }
}

/// Outcome counters for one training pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSummary {
    /// Descriptors stored in the training index.
    pub indexed: usize,
    /// Samples dropped because the image failed to load or decode.
    pub decode_failures: u64,
    /// Samples whose scan visited no pixels.
    pub degenerate_histograms: u64,
    pub elapsed_ms: f64,
}

/// Per-class and aggregate accuracy for one evaluation pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub classes: Vec<ClassTally>,
    /// Test samples dropped because the image failed to load or decode.
    pub decode_failures: u64,
    /// Test samples whose scan visited no pixels.
    pub degenerate_histograms: u64,
    pub elapsed_ms: f64,
}

impl EvaluationReport {
    /// Report with zeroed tallies for classes `0..classes`.
    pub fn new(classes: u32) -> Self {
        assert!(classes > 0, "class count must be positive");
        EvaluationReport {
            classes: (0..classes)
                .map(|class| ClassTally {
                    class,
                    correct: 0,
                    total: 0,
                })
                .collect(),
            decode_failures: 0,
            degenerate_histograms: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Counts one prediction for `true_label`.
    ///
    /// Labels outside the configured class range are a caller bug and abort.
    pub fn record(&mut self, true_label: u32, correct: bool) {
        let idx = true_label as usize;
        assert!(
            idx < self.classes.len(),
            "true label {true_label} outside the {} configured classes",
            self.classes.len()
        );
        let tally = &mut self.classes[idx];
        tally.total += 1;
        if correct {
            tally.correct += 1;
        }
    }

    /// Correct predictions summed over all classes.
    pub fn correct_total(&self) -> u64 {
        self.classes.iter().map(|t| t.correct).sum()
    }

    /// Predictions counted over all classes.
    pub fn tested_total(&self) -> u64 {
        self.classes.iter().map(|t| t.total).sum()
    }

    /// Σcorrect / Σtotal, or `None` when nothing was tested.
    pub fn overall_accuracy(&self) -> Option<f64> {
        let tested = self.tested_total();
        if tested == 0 {
            return None;
        }
        Some(self.correct_total() as f64 / tested as f64)
    }
}
