use csv::WriterBuilder;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::combine::mapping::{ColumnMapping, UnifiedRow};
use crate::error::{Error, Result};

/// Writes the unified header and rows as UTF-8 CSV.
///
/// Output goes to a temporary file next to `path` which is renamed over it
/// once complete; a failure part way through leaves nothing behind.
pub fn write_combined(path: &Path, mapping: &ColumnMapping, rows: &[UnifiedRow]) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

    {
        let mut writer = WriterBuilder::new().from_writer(temp.as_file());
        writer
            .write_record(mapping.display_names())
            .map_err(|e| Error::csv(path, e))?;
        for row in rows {
            writer.write_record(row.values()).map_err(|e| Error::csv(path, e))?;
        }
        writer.flush().map_err(|e| Error::io(path, e))?;
    }
    temp.as_file().sync_all().map_err(|e| Error::io(path, e))?;

    temp.persist(path).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
