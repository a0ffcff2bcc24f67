//! Run configuration for each command, built once in `main` and passed down.

use std::path::{Path, PathBuf};

use crate::digest::{HashLength, SEARCH_HASH_LENGTH};

pub const DEFAULT_OUTPUT_FILE: &str = "out.csv";
pub const DEFAULT_DELIMITER: char = '#';
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone)]
pub struct CombineConfig {
    pub input_dir: PathBuf,
    pub output_file: String,
    pub preview_rows: usize,
}

impl CombineConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        CombineConfig {
            input_dir: input_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            preview_rows: PREVIEW_ROWS,
        }
    }

    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// The combined file always lands inside the input directory.
    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_file)
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnonymizeConfig {
    pub delimiter: char,
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        AnonymizeConfig { delimiter: DEFAULT_DELIMITER }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub hash_length: HashLength,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            hash_length: HashLength::Truncated(SEARCH_HASH_LENGTH),
        }
    }
}

impl SearchConfig {
    pub fn with_hash_length(hash_length: usize) -> Self {
        SearchConfig {
            hash_length: HashLength::from_len(hash_length),
        }
    }
}
