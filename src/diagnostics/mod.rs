//! Run diagnostics: progress callbacks and serializable result summaries.
//!
//! The report structures double as the JSON schema of the benchmark binary,
//! so they carry serde derives with camelCase field names.

pub mod progress;
pub mod report;

pub use progress::{NoProgress, Phase, ProgressObserver};
pub use report::{ClassTally, EvaluationReport, TrainSummary};
