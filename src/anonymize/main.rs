//! Anonymize command implementation

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::anonymize::Anonymizer;
use crate::config::AnonymizeConfig;
use crate::error::Error;

/// Nothing is written unless the whole input anonymizes cleanly. File output
/// goes through a temporary file renamed over `output`, so the input may also
/// be the output.
pub fn run(input: &Path, output: Option<&Path>, config: AnonymizeConfig) -> Result<u64> {
    if !input.is_file() {
        return Err(Error::FileNotFound(input.to_path_buf()).into());
    }

    tracing::debug!("Anonymizing {} (delimiter: {:?})", input.display(), config.delimiter);

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| Error::io(input, e))?;
    let anonymizer = Anonymizer::new(config);

    let lines = match output {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
            let lines = anonymizer
                .process(reader, BufWriter::new(temp.as_file()))
                .with_context(|| format!("failed to anonymize into {}", path.display()))?;
            temp.persist(path).map_err(|source| Error::Persist {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!("Wrote {} anonymized lines to {}", lines, path.display());
            lines
        }
        None => {
            let mut buf = Vec::new();
            let lines = anonymizer
                .process(reader, &mut buf)
                .context("failed to anonymize to stdout")?;
            io::stdout().lock().write_all(&buf).context("failed to write to stdout")?;
            lines
        }
    };

    Ok(lines)
}
