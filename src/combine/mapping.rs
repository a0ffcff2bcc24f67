use std::collections::HashMap;

/// Case-insensitive column key: lowercase, then trim.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

/// Ordered association from normalized column key to the first-seen spelling
/// of that column. Position in `entries` is the output column order.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `original` unless a column with the same key is already
    /// present. Returns whether it was added.
    pub fn register(&mut self, original: &str) -> bool {
        let key = normalize_column_name(original);
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, original.to_string()));
        true
    }

    /// Output position of the canonical column matching `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&normalize_column_name(name)).copied()
    }

    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.position(name).map(|pos| self.entries[pos].1.as_str())
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, display)| display.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A row projected onto a [`ColumnMapping`]; one slot per canonical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedRow {
    values: Vec<String>,
}

impl UnifiedRow {
    pub fn empty(mapping: &ColumnMapping) -> Self {
        UnifiedRow {
            values: vec![String::new(); mapping.len()],
        }
    }

    pub fn set(&mut self, position: usize, value: &str) {
        if let Some(slot) = self.values.get_mut(position) {
            *slot = value.to_string();
        }
    }

    pub fn get<'a>(&'a self, mapping: &ColumnMapping, column: &str) -> Option<&'a str> {
        mapping
            .position(column)
            .and_then(|pos| self.values.get(pos))
            .map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
