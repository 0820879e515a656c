use crate::classifier::{ClassifierParams, DecodePolicy, DegeneratePolicy};
use crate::dataset::ListFormat;
use crate::lbp::LbpOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration of the `lbp_bench` binary.
///
/// Every field is optional; omitted fields keep the built-in defaults
/// (8 points, radius 1, stride 3, 10 classes, lenient lists).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub lbp: LbpConfig,
    pub classes: Option<u32>,
    pub decode_policy: Option<DecodePolicy>,
    pub degenerate_policy: Option<DegeneratePolicy>,
    pub list_format: Option<ListFormat>,
    /// When set, the evaluation report is also written here as JSON.
    pub report_json: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LbpConfig {
    pub points: Option<u32>,
    pub radius: Option<f64>,
    pub stride: Option<usize>,
}

impl LbpConfig {
    pub fn resolve(&self) -> LbpOptions {
        let mut options = LbpOptions::default();
        if let Some(v) = self.points {
            options.points = v;
        }
        if let Some(v) = self.radius {
            options.radius = v;
        }
        if let Some(v) = self.stride {
            options.stride = v;
        }
        options
    }
}

impl BenchConfig {
    pub fn resolve_params(&self) -> ClassifierParams {
        let mut params = ClassifierParams::default();
        params.lbp = self.lbp.resolve();
        if let Some(v) = self.classes {
            params.classes = v;
        }
        if let Some(v) = self.decode_policy {
            params.decode_policy = v;
        }
        if let Some(v) = self.degenerate_policy {
            params.degenerate_policy = v;
        }
        params
    }

    pub fn list_format(&self) -> ListFormat {
        self.list_format.unwrap_or_default()
    }
}

pub fn load_config(path: &Path) -> Result<BenchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
