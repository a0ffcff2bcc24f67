use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// An anonymized CSV held entirely in memory.
#[derive(Debug, Clone)]
pub struct AnonymizedTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl AnonymizedTable {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| Error::csv(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .into_records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::csv(path, e))?;

        tracing::debug!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(AnonymizedTable { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Position of `column`; when a header repeats, the last one wins.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == column)
    }

    /// `None` when the column is unknown or the row is too short to hold it.
    pub fn cell<'a>(&self, row: &'a StringRecord, column: &str) -> Option<&'a str> {
        self.column_index(column).and_then(|i| row.get(i))
    }
}
