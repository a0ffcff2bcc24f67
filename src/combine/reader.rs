use csv::{ReaderBuilder, StringRecord};
use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

use crate::combine::encoding::decode_bytes;
use crate::combine::mapping::{ColumnMapping, UnifiedRow};
use crate::error::{Error, Result};

/// Lists `*.csv` entries directly inside `dir`, sorted by name. `exclude` is a
/// file name (typically the combined output) that is never returned.
pub fn discover_csv_files(dir: &Path, exclude: Option<&str>) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !name.ends_with(".csv") || Some(name) == exclude {
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}

/// A CSV file decoded to text, together with the encoding it was read as.
pub struct DecodedCsv {
    pub path: PathBuf,
    pub encoding: &'static Encoding,
    text: String,
}

impl DecodedCsv {
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let (text, encoding) = decode_bytes(&bytes);
        Ok(DecodedCsv {
            path: path.to_path_buf(),
            encoding,
            text,
        })
    }

    fn reader(&self) -> csv::Reader<&[u8]> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(self.text.as_bytes())
    }

    /// The first record, or `None` for a file with no rows at all.
    pub fn header(&self) -> Result<Option<Vec<String>>> {
        match self.reader().records().next() {
            None => Ok(None),
            Some(Ok(record)) => Ok(Some(record.iter().map(str::to_string).collect())),
            Some(Err(e)) => Err(Error::csv(&self.path, e)),
        }
    }

    /// Header plus every body record. Blank lines are skipped by the parser.
    pub fn records(&self) -> Result<(Vec<String>, Vec<StringRecord>)> {
        let mut records = self.reader().into_records();
        let header = match records.next() {
            None => return Ok((Vec::new(), Vec::new())),
            Some(record) => record.map_err(|e| Error::csv(&self.path, e))?,
        };

        let body = records
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::csv(&self.path, e))?;

        Ok((header.iter().map(str::to_string).collect(), body))
    }
}

/// How one source header cell relates to the unified columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMapping {
    Kept(String),
    Mapped { from: String, to: String },
    Unmapped(String),
}

pub struct FileProjection {
    pub path: PathBuf,
    pub encoding: &'static Encoding,
    pub headers: Vec<HeaderMapping>,
    pub rows: Vec<UnifiedRow>,
}

/// Re-reads `path` and projects every body row onto `mapping`. Columns the
/// file lacks stay empty; values past the header width are dropped.
pub fn project_file(path: &Path, mapping: &ColumnMapping) -> Result<FileProjection> {
    let decoded = DecodedCsv::open(path)?;
    let (header, records) = decoded.records()?;

    let positions: Vec<Option<usize>> = header.iter().map(|col| mapping.position(col)).collect();

    let headers = header
        .iter()
        .map(|col| match mapping.canonical(col) {
            Some(canonical) if canonical == col => HeaderMapping::Kept(col.clone()),
            Some(canonical) => HeaderMapping::Mapped {
                from: col.clone(),
                to: canonical.to_string(),
            },
            None => HeaderMapping::Unmapped(col.clone()),
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            let mut row = UnifiedRow::empty(mapping);
            for (i, position) in positions.iter().enumerate() {
                if let Some(position) = position {
                    row.set(*position, record.get(i).unwrap_or(""));
                }
            }
            row
        })
        .collect();

    Ok(FileProjection {
        path: path.to_path_buf(),
        encoding: decoded.encoding,
        headers,
        rows,
    })
}
