//! Texture classification: training-index construction and evaluation.
//!
//! Modules
//! - `options`: immutable run parameters and per-sample failure policies.
//! - `index`: labeled descriptor storage built during training.
//! - `pipeline`: [`TextureClassifier`] orchestrating both passes.

pub mod index;
pub mod options;
pub mod pipeline;

pub use index::TrainingIndex;
pub use options::{ClassifierParams, DecodePolicy, DegeneratePolicy};
pub use pipeline::{TextureClassifier, TrainOutcome};
