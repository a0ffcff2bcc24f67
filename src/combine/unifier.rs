use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::combine::mapping::{ColumnMapping, UnifiedRow};
use crate::combine::reader::{discover_csv_files, project_file, DecodedCsv, HeaderMapping};
use crate::combine::writer::write_combined;
use crate::config::CombineConfig;
use crate::error::{Error, Result};

/// Per-file result of the projection phase.
#[derive(Debug, Clone)]
pub enum FileReport {
    Added {
        path: PathBuf,
        encoding: &'static str,
        headers: Vec<HeaderMapping>,
        rows: usize,
    },
    Skipped {
        path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct CombineSummary {
    pub output_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub preview: Vec<Vec<String>>,
    pub file_reports: Vec<FileReport>,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    NoFiles,
    NoColumns { files: Vec<PathBuf> },
    NoRows { files: Vec<PathBuf>, file_reports: Vec<FileReport> },
    Combined(CombineSummary),
}

/// Result of a whole run. The stale output is deleted before discovery, so
/// whether that happened is known regardless of the outcome.
#[derive(Debug, Clone)]
pub struct CombineRun {
    pub removed_previous_output: bool,
    pub outcome: Outcome,
}

pub struct Unifier {
    config: CombineConfig,
}

impl Unifier {
    pub fn new(config: CombineConfig) -> Self {
        Unifier { config }
    }

    /// Phase 1: scan every header and keep the first spelling of each column.
    /// Unreadable files are logged and left out of the mapping.
    pub fn build_column_mapping(files: &[PathBuf]) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();

        for path in files {
            let header = DecodedCsv::open(path).and_then(|decoded| decoded.header());
            match header {
                Ok(Some(columns)) => {
                    for column in &columns {
                        mapping.register(column);
                    }
                }
                Ok(None) => tracing::debug!("{} has no header row", path.display()),
                Err(e) => tracing::warn!("Could not read {}: {}", path.display(), e),
            }
        }

        mapping
    }

    pub fn run(&self) -> Result<CombineRun> {
        let dir = self.config.input_dir();
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound(dir.to_path_buf()));
        }

        let output_path = self.config.output_path();
        let removed_previous_output = remove_previous_output(&output_path)?;
        let outcome = self.combine_into(&output_path)?;
        Ok(CombineRun {
            removed_previous_output,
            outcome,
        })
    }

    fn combine_into(&self, output_path: &Path) -> Result<Outcome> {
        let dir = self.config.input_dir();

        let files = discover_csv_files(dir, Some(&self.config.output_file))?;
        if files.is_empty() {
            tracing::info!("No CSV files found in {}", dir.display());
            return Ok(Outcome::NoFiles);
        }
        tracing::info!("Found {} CSV files in {}", files.len(), dir.display());

        let mapping = Self::build_column_mapping(&files);
        if mapping.is_empty() {
            return Ok(Outcome::NoColumns { files });
        }
        tracing::info!("Unified {} columns", mapping.len());

        let mut rows: Vec<UnifiedRow> = Vec::new();
        let mut file_reports = Vec::with_capacity(files.len());

        for path in &files {
            match project_file(path, &mapping) {
                Ok(projection) => {
                    tracing::debug!(
                        "{}: {} rows as {}",
                        path.display(),
                        projection.rows.len(),
                        projection.encoding.name()
                    );
                    file_reports.push(FileReport::Added {
                        path: projection.path,
                        encoding: projection.encoding.name(),
                        headers: projection.headers,
                        rows: projection.rows.len(),
                    });
                    rows.extend(projection.rows);
                }
                Err(e) => {
                    tracing::error!("Error reading {}: {}", path.display(), e);
                    file_reports.push(FileReport::Skipped {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if rows.is_empty() {
            return Ok(Outcome::NoRows { files, file_reports });
        }

        write_combined(output_path, &mapping, &rows)?;
        tracing::info!("Combined {} rows into {}", rows.len(), output_path.display());

        let preview = rows
            .iter()
            .take(self.config.preview_rows)
            .map(|row| row.values().to_vec())
            .collect();

        Ok(Outcome::Combined(CombineSummary {
            output_path: output_path.to_path_buf(),
            files,
            columns: mapping.display_names().map(str::to_string).collect(),
            row_count: rows.len(),
            preview,
            file_reports,
        }))
    }
}

fn remove_previous_output(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("Deleted existing {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
