use std::io::{BufRead, Write};

use crate::config::AnonymizeConfig;
use crate::digest::Digester;

pub struct Anonymizer {
    digester: Digester,
    delimiter: char,
}

impl Anonymizer {
    pub fn new(config: AnonymizeConfig) -> Self {
        Anonymizer {
            digester: Digester::full(),
            delimiter: config.delimiter,
        }
    }

    /// Empty lines pass through; every field of any other line is digested,
    /// including empty fields between adjacent delimiters.
    pub fn anonymize_line(&self, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(line.len() * 4);
        for (i, field) in line.split(self.delimiter).enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            out.push_str(&self.digester.digest(field));
        }
        out
    }

    /// Writes exactly one `\n`-terminated line per input line and returns the
    /// number of lines processed.
    pub fn process<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> std::io::Result<u64> {
        let mut buf = String::new();
        let mut lines = 0u64;

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(&['\n', '\r'][..]);
            writeln!(writer, "{}", self.anonymize_line(line))?;
            lines += 1;
        }

        writer.flush()?;
        Ok(lines)
    }
}

impl Default for Anonymizer {
    fn default() -> Self {
        Anonymizer::new(AnonymizeConfig::default())
    }
}
