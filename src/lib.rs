pub mod anonymize;
pub mod combine;
pub mod config;
pub mod digest;
pub mod error;
pub mod search;

pub use config::{AnonymizeConfig, CombineConfig, SearchConfig};
pub use digest::{Digester, HashLength, FULL_HASH_LENGTH, SEARCH_HASH_LENGTH};
pub use error::{Error, Result};
