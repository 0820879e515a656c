//! Dataset list files: one `<label> <path>` record per line.
//!
//! The lenient mode mirrors the single-space tokenizer many published
//! benchmark harnesses use (lines without a second field are dropped,
//! unparseable labels become 0), while counting and logging every such repair
//! so silently odd lists still surface. Strict mode turns both repairs into
//! errors with line numbers.
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One dataset record: an image path and its class label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub path: PathBuf,
    pub label: u32,
}

/// How strictly list files are parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListFormat {
    /// Skip lines without a path field, default unparseable labels to 0.
    #[default]
    Lenient,
    /// Reject both with a line-numbered error.
    Strict,
}

/// Counters for the repairs lenient parsing applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty lines dropped for missing a path field.
    pub malformed_lines: u64,
    /// Labels that failed to parse and defaulted to 0.
    pub defaulted_labels: u64,
}

impl ParseStats {
    /// True when every line parsed without repair.
    pub fn is_clean(&self) -> bool {
        self.malformed_lines == 0 && self.defaulted_labels == 0
    }
}

/// Parses list-file text into samples in line order.
///
/// Fields are split on single spaces; anything after the second field is
/// ignored. Empty lines are skipped in both modes, and a line ending in the
/// separator counts as missing its path field.
pub fn parse_dataset(text: &str, format: ListFormat) -> Result<(Vec<Sample>, ParseStats), String> {
    let mut samples = Vec::new();
    let mut stats = ParseStats::default();
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, ' ');
        let label_field = fields.next().unwrap_or("");
        // A line ending in the separator splits into a label plus one
        // trailing empty field; that line has no path. An interior empty
        // field ("5  x") is a real, empty path.
        let path_field = match (fields.next(), fields.next()) {
            (Some(path), rest) if !path.is_empty() || rest.is_some() => Some(path),
            _ => None,
        };
        let Some(path_field) = path_field else {
            if format == ListFormat::Strict {
                return Err(format!("line {lineno} has no path field: {line:?}"));
            }
            warn!("skipping line {lineno} with no path field: {line:?}");
            stats.malformed_lines += 1;
            continue;
        };
        let label = match label_field.parse::<u32>() {
            Ok(v) => v,
            Err(_) if format == ListFormat::Strict => {
                return Err(format!(
                    "line {lineno} label {label_field:?} is not a non-negative integer"
                ));
            }
            Err(_) => {
                warn!("line {lineno} label {label_field:?} is not a non-negative integer, using 0");
                stats.defaulted_labels += 1;
                0
            }
        };
        samples.push(Sample {
            path: PathBuf::from(path_field),
            label,
        });
    }
    Ok((samples, stats))
}

/// Reads and parses the list file at `path`.
pub fn load_dataset(path: &Path, format: ListFormat) -> Result<(Vec<Sample>, ParseStats), String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read dataset list {}: {e}", path.display()))?;
    parse_dataset(&text, format)
}
