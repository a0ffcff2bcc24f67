//! Merging CSV files whose headers differ only in case and whitespace

pub mod encoding;
pub mod main;
pub mod mapping;
pub mod reader;
pub mod unifier;
pub mod writer;

pub use mapping::{normalize_column_name, ColumnMapping, UnifiedRow};
pub use reader::{discover_csv_files, project_file, FileProjection, HeaderMapping};
pub use unifier::{CombineRun, CombineSummary, FileReport, Outcome, Unifier};
pub use writer::write_combined;
