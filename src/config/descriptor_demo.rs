use super::bench::LbpConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration of the `descriptor_demo` binary.
#[derive(Debug, Deserialize)]
pub struct DescriptorDemoConfig {
    /// Image whose descriptor is computed.
    pub input: PathBuf,
    #[serde(default)]
    pub lbp: LbpConfig,
    /// Destination of the JSON report; stdout when omitted.
    #[serde(default)]
    pub result_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DescriptorDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
