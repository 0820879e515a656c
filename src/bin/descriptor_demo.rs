use lbp_classifier::config::descriptor_demo;
use lbp_classifier::image::{load_grayscale_image, write_json_file};
use lbp_classifier::lbp::{LbpHistogram, LbpOptions};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = descriptor_demo::load_config(Path::new(&config_path))?;

    let image = load_grayscale_image(&config.input)?;
    let options = config.lbp.resolve();
    let hist = LbpHistogram::scan(&image.as_view(), &options);
    let descriptor = hist.normalized();

    let result = DescriptorDemoOutput {
        input: config.input.display().to_string(),
        width: image.width(),
        height: image.height(),
        options,
        sampled_pixels: hist.samples(),
        degenerate: descriptor.is_none(),
        top_bins: descriptor.as_deref().map(top_bins).unwrap_or_default(),
        histogram: descriptor,
    };

    match &config.result_json {
        Some(path) => {
            write_json_file(path, &result)?;
            println!("Saved descriptor report to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("Failed to serialize report: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: descriptor_demo <config.json>".to_string()
}

fn top_bins(descriptor: &[f64]) -> Vec<BinMass> {
    let mut ranked: Vec<BinMass> = descriptor
        .iter()
        .enumerate()
        .filter(|(_, &mass)| mass > 0.0)
        .map(|(code, &mass)| BinMass {
            code: code as u32,
            mass,
        })
        .collect();
    ranked.sort_by(|a, b| b.mass.total_cmp(&a.mass));
    ranked.truncate(8);
    ranked
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BinMass {
    code: u32,
    mass: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorDemoOutput {
    input: String,
    width: usize,
    height: usize,
    options: LbpOptions,
    sampled_pixels: u64,
    degenerate: bool,
    top_bins: Vec<BinMass>,
    histogram: Option<Vec<f64>>,
}
