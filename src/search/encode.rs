//! Encode command implementation

use crate::config::SearchConfig;
use crate::digest::Digester;

/// Joins `words` with single spaces and returns the term with its encoding,
/// or `None` when there is nothing to encode.
pub fn run(words: &[String], config: SearchConfig) -> Option<(String, String)> {
    if words.is_empty() {
        println!("Usage: csvanon encode <search_term>...");
        println!("Example: csvanon encode John Doe");
        return None;
    }

    let term = words.join(" ");
    let encoded = Digester::new(config.hash_length).encode(&term);
    println!("'{}' -> '{}'", term, encoded);
    Some((term, encoded))
}
