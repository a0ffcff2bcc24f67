use std::fmt;
use std::str::FromStr;

use csv::StringRecord;

use crate::digest::Digester;
use crate::error::Error;
use crate::search::table::AnonymizedTable;

pub const ANY_COLUMN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Named(String),
    Any,
}

impl ColumnSelector {
    pub fn new(column: &str) -> Self {
        if column == ANY_COLUMN {
            ColumnSelector::Any
        } else {
            ColumnSelector::Named(column.to_string())
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Named(name) => f.write_str(name),
            ColumnSelector::Any => f.write_str(ANY_COLUMN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub column: ColumnSelector,
    pub term: String,
}

impl Query {
    pub fn new(column: &str, term: &str) -> Self {
        Query {
            column: ColumnSelector::new(column),
            term: term.to_string(),
        }
    }
}

/// Parses `column=term`; only the first `=` separates, so terms may contain it.
impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((column, term)) if !column.is_empty() => Ok(Query::new(column, term)),
            _ => Err(Error::InvalidQuery(s.to_string())),
        }
    }
}

/// A query with its term already digested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    pub column: ColumnSelector,
    pub term: String,
    pub encoded: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// 1-based position among the data rows.
    pub row_number: usize,
    pub fields: Vec<(String, String)>,
}

impl SearchMatch {
    fn new(table: &AnonymizedTable, row_number: usize, row: &StringRecord) -> Self {
        let fields = table
            .headers()
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        SearchMatch { row_number, fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(h, _)| h == column)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {{", self.row_number)?;
        for (i, (column, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", column, value)?;
        }
        f.write_str("}")
    }
}

pub struct Searcher {
    digester: Digester,
}

impl Searcher {
    pub fn new(digester: Digester) -> Self {
        Searcher { digester }
    }

    pub fn encode(&self, queries: &[Query]) -> Vec<EncodedQuery> {
        queries
            .iter()
            .map(|q| EncodedQuery {
                column: q.column.clone(),
                term: q.term.clone(),
                encoded: self.digester.encode(&q.term),
            })
            .collect()
    }

    pub fn search_column(&self, table: &AnonymizedTable, column: &str, term: &str) -> Vec<SearchMatch> {
        self.search_all(table, &[Query::new(column, term)])
    }

    /// Rows matching every query. `Any` selectors match if any cell under a
    /// header is equal.
    pub fn search_all(&self, table: &AnonymizedTable, queries: &[Query]) -> Vec<SearchMatch> {
        let encoded = self.encode(queries);
        filter_rows(table, |row| encoded.iter().all(|q| matches(table, row, q)))
    }

    /// Rows matching at least one query.
    pub fn search_any(&self, table: &AnonymizedTable, queries: &[Query]) -> Vec<SearchMatch> {
        let encoded = self.encode(queries);
        filter_rows(table, |row| encoded.iter().any(|q| matches(table, row, q)))
    }
}

fn matches(table: &AnonymizedTable, row: &StringRecord, query: &EncodedQuery) -> bool {
    match &query.column {
        ColumnSelector::Named(column) => table.cell(row, column) == Some(query.encoded.as_str()),
        ColumnSelector::Any => row
            .iter()
            .take(table.headers().len())
            .any(|cell| cell == query.encoded),
    }
}

fn filter_rows<F>(table: &AnonymizedTable, predicate: F) -> Vec<SearchMatch>
where
    F: Fn(&StringRecord) -> bool,
{
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| predicate(*row))
        .map(|(i, row)| SearchMatch::new(table, i + 1, row))
        .collect()
}
