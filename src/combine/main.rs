//! Combine command implementation

use anyhow::Result;
use std::path::Path;

use crate::combine::{CombineRun, FileReport, HeaderMapping, Outcome, Unifier};
use crate::config::CombineConfig;

pub fn run(config: CombineConfig) -> Result<CombineRun> {
    println!("Input directory: {}", config.input_dir.display());
    println!("Output file: {}", config.output_file);
    println!("{}", "=".repeat(50));

    let output_file = config.output_file.clone();
    let run = Unifier::new(config).run()?;
    if run.removed_previous_output {
        println!("Deleted existing {}", output_file);
    }
    report(&run.outcome);
    Ok(run)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn report_files(files: &[std::path::PathBuf]) {
    println!("Found {} CSV files:", files.len());
    for path in files {
        println!("  - {}", file_name(path));
    }
}

fn report_file(file_report: &FileReport) {
    match file_report {
        FileReport::Added { path, encoding, headers, rows } => {
            println!("\nProcessing: {}", file_name(path));
            println!("  Detected encoding: {}", encoding);
            for header in headers {
                match header {
                    HeaderMapping::Kept(col) => println!("  Keeping '{}'", col),
                    HeaderMapping::Mapped { from, to } => println!("  Mapped '{}' -> '{}'", from, to),
                    HeaderMapping::Unmapped(_) => {}
                }
            }
            println!("  Added {} rows", rows);
        }
        FileReport::Skipped { path, reason } => {
            println!("\nProcessing: {}", file_name(path));
            println!("  Skipped: {}", reason);
        }
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::NoFiles => {
            println!("No CSV files found in the input directory.");
        }
        Outcome::NoColumns { files } => {
            report_files(files);
            println!("No valid columns found in any CSV files.");
        }
        Outcome::NoRows { files, file_reports } => {
            report_files(files);
            file_reports.iter().for_each(report_file);
            println!("No data could be processed from any CSV files.");
        }
        Outcome::Combined(summary) => {
            report_files(&summary.files);

            println!("\nFound {} unique columns (case-insensitive):", summary.columns.len());
            for column in &summary.columns {
                println!("  - {}", column);
            }

            summary.file_reports.iter().for_each(report_file);

            println!("\nCombined data from {} files", summary.files.len());
            println!("Combined CSV saved as: {}", summary.output_path.display());
            println!("Total rows: {}", summary.row_count);
            println!("Total columns: {}", summary.columns.len());

            println!("\nPreview of combined data (first {} rows):", summary.preview.len());
            println!("Columns: {}", summary.columns.join(", "));
            for (i, values) in summary.preview.iter().enumerate() {
                println!("Row {}: {:?}", i + 1, values);
            }
        }
    }
}
