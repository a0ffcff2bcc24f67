//! Search command implementation

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::SearchConfig;
use crate::digest::Digester;
use crate::search::{AnonymizedTable, Query, SearchMatch, SearchMode, Searcher};

pub fn run(input: &Path, queries: &[Query], mode: SearchMode, config: SearchConfig) -> Result<Vec<SearchMatch>> {
    let table = AnonymizedTable::load(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    tracing::info!("Searching {} rows of {}", table.len(), input.display());

    let searcher = Searcher::new(Digester::new(config.hash_length));
    for query in searcher.encode(queries) {
        println!("Column '{}': '{}' -> '{}'", query.column, query.term, query.encoded);
    }

    let matches = match mode {
        SearchMode::All => searcher.search_all(&table, queries),
        SearchMode::Any => searcher.search_any(&table, queries),
    };

    println!("Found {} matches", matches.len());
    for m in &matches {
        println!("{}", m);
    }

    Ok(matches)
}
