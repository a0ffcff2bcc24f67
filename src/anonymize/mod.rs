//! Line-oriented anonymization of delimited text files

pub mod anonymizer;
pub mod main;

pub use anonymizer::Anonymizer;
