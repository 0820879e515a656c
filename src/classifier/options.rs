//! Parameter types configuring the texture classifier.
use crate::lbp::LbpOptions;
use serde::Deserialize;

/// What to do when an image cannot be loaded or decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePolicy {
    /// Warn, count the failure, and continue with the remaining samples.
    #[default]
    Skip,
    /// Abort the whole run with an error.
    Abort,
}

/// What to do when an image is too small to sample any pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Warn, count, and exclude the sample.
    #[default]
    Skip,
    /// Warn, count, and let an all-zero descriptor participate.
    ZeroFill,
}

/// Classifier-wide parameters, immutable for the classifier's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct ClassifierParams {
    /// LBP descriptor extraction parameters.
    pub lbp: LbpOptions,
    /// Number of classes; labels must stay in `[0, classes)`.
    pub classes: u32,
    pub decode_policy: DecodePolicy,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            lbp: LbpOptions::default(),
            classes: 10,
            decode_policy: DecodePolicy::default(),
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl ClassifierParams {
    /// Panics when a field is outside its valid domain.
    pub fn validate(&self) {
        self.lbp.validate();
        assert!(self.classes > 0, "class count must be positive");
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifierParams, DecodePolicy, DegeneratePolicy};

    #[test]
    fn defaults_are_valid() {
        let params = ClassifierParams::default();
        assert_eq!(params.classes, 10);
        assert_eq!(params.decode_policy, DecodePolicy::Skip);
        assert_eq!(params.degenerate_policy, DegeneratePolicy::Skip);
        params.validate();
    }

    #[test]
    #[should_panic(expected = "class count")]
    fn zero_classes_is_rejected() {
        ClassifierParams {
            classes: 0,
            ..ClassifierParams::default()
        }
        .validate();
    }

    #[test]
    fn policies_deserialize_from_kebab_case() {
        let decode: DecodePolicy = serde_json::from_str("\"abort\"").unwrap();
        assert_eq!(decode, DecodePolicy::Abort);
        let degenerate: DegeneratePolicy = serde_json::from_str("\"zero-fill\"").unwrap();
        assert_eq!(degenerate, DegeneratePolicy::ZeroFill);
    }
}
