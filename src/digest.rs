//! The hashing convention shared by every command.
//!
//! A value is normalized (trim, then lowercase), hashed with plain SHA-256 and
//! hex encoded. The anonymizer keeps all 64 hex characters while search terms
//! are truncated to [`SEARCH_HASH_LENGTH`], so the two only agree on a prefix.

use sha2::{Digest as _, Sha256};

pub const FULL_HASH_LENGTH: usize = 64;
pub const SEARCH_HASH_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashLength {
    Full,
    Truncated(usize),
}

impl HashLength {
    /// Lengths at or beyond the full digest collapse to `Full`.
    pub fn from_len(len: usize) -> Self {
        if len >= FULL_HASH_LENGTH {
            HashLength::Full
        } else {
            HashLength::Truncated(len)
        }
    }

    pub fn hex_chars(&self) -> usize {
        match self {
            HashLength::Full => FULL_HASH_LENGTH,
            HashLength::Truncated(len) => (*len).min(FULL_HASH_LENGTH),
        }
    }
}

pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy)]
pub struct Digester {
    length: HashLength,
}

impl Digester {
    pub fn new(length: HashLength) -> Self {
        Digester { length }
    }

    pub fn full() -> Self {
        Digester::new(HashLength::Full)
    }

    pub fn truncated(len: usize) -> Self {
        Digester::new(HashLength::from_len(len))
    }

    pub fn length(&self) -> HashLength {
        self.length
    }

    pub fn digest(&self, value: &str) -> String {
        let hash = Sha256::digest(normalize_value(value).as_bytes());
        let mut encoded = hex::encode(hash);
        encoded.truncate(self.length.hex_chars());
        encoded
    }

    /// Like [`Digester::digest`], but blank terms encode to an empty string.
    pub fn encode(&self, term: &str) -> String {
        if term.trim().is_empty() {
            return String::new();
        }
        self.digest(term)
    }
}

impl Default for Digester {
    fn default() -> Self {
        Digester::full()
    }
}
