use lbp_classifier::config::bench::{self, BenchConfig};
use lbp_classifier::dataset::{load_dataset, ParseStats};
use lbp_classifier::diagnostics::{Phase, ProgressObserver};
use lbp_classifier::image::{write_json_file, FsImageSource};
use lbp_classifier::TextureClassifier;
use std::env;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let train_list = args.next().ok_or_else(usage)?;
    let test_list = args.next().ok_or_else(usage)?;
    let config = match args.next() {
        Some(path) => bench::load_config(Path::new(&path))?,
        None => BenchConfig::default(),
    };

    let format = config.list_format();
    let (train, train_stats) = load_dataset(Path::new(&train_list), format)?;
    let (test, test_stats) = load_dataset(Path::new(&test_list), format)?;
    report_list_repairs(&train_list, train_stats);
    report_list_repairs(&test_list, test_stats);

    let classifier = TextureClassifier::new(config.resolve_params());
    let mut progress = ConsoleProgress::new();
    let outcome = classifier.train_with_progress(&FsImageSource, &train, &mut progress)?;
    let report =
        classifier.evaluate_with_progress(&FsImageSource, &outcome.index, &test, &mut progress)?;
    progress.finish();

    for tally in &report.classes {
        println!("Class {}: {}/{}", tally.class, tally.correct, tally.total);
    }
    println!();
    match report.overall_accuracy() {
        Some(accuracy) => println!(
            "Total: {}/{} = {accuracy:.6}",
            report.correct_total(),
            report.tested_total()
        ),
        None => println!("Total: 0/0 = n/a"),
    }

    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        println!("Saved evaluation report to {}", path.display());
    }

    Ok(())
}

fn report_list_repairs(list: &str, stats: ParseStats) {
    if !stats.is_clean() {
        log::warn!(
            "{list}: dropped {} malformed lines, defaulted {} labels",
            stats.malformed_lines,
            stats.defaulted_labels
        );
    }
}

fn usage() -> String {
    "Usage: lbp_bench <train-list> <test-list> [config.json]".to_string()
}

/// Prints a carriage-return progress line per sample, one line per phase,
/// and a blank line separating the progress block from the summary.
struct ConsoleProgress<W: Write> {
    out: W,
    last_phase: Option<Phase>,
}

impl ConsoleProgress<io::Stdout> {
    fn new() -> Self {
        ConsoleProgress {
            out: io::stdout(),
            last_phase: None,
        }
    }
}

impl<W: Write> ConsoleProgress<W> {
    fn finish(&mut self) {
        if self.last_phase.take().is_some() {
            let _ = writeln!(self.out);
            let _ = writeln!(self.out);
        }
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn on_sample(&mut self, phase: Phase, index: usize, total: usize) {
        if self.last_phase.is_some_and(|last| last != phase) {
            let _ = writeln!(self.out);
        }
        self.last_phase = Some(phase);
        let _ = write!(
            self.out,
            "Extracting LBP histogram for {} image {}/{total}\r",
            phase.as_str(),
            index + 1
        );
        let _ = self.out.flush();
    }
}
