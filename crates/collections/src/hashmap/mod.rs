use thiserror::Error;

mod config;
pub(crate) mod fnv;
mod hash_table;
mod set;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The probe hit an empty slot before an equal key
    #[error("Could not find key: {key}")]
    KeyNotFound { key: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Initial capacity must be at least one slot")]
    ZeroCapacity,
    #[error("Max load factor must lie in (0, 1), got: {max_load}")]
    InvalidMaxLoad { max_load: f64 },
    #[error("Min load factor must be non-negative, got: {min_load}")]
    InvalidMinLoad { min_load: f64 },
    #[error("Min load factor {min_load} must be lower than max load factor {max_load}")]
    InvertedThresholds { min_load: f64, max_load: f64 },
}

pub use config::{DeletePolicy, TableConfig};
pub use hash_table::HashTable;
pub use set::StrSet;
