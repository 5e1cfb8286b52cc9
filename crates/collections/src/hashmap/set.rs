use super::hash_table::HashTable;
use super::{ConfigError, TableConfig, TableError};

/// A set of strings where the stored value is the key itself
#[derive(Debug, Default)]
pub struct StrSet {
    table: HashTable<()>,
}

impl StrSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table: HashTable::with_config(config)?,
        })
    }

    /// Adds `key`. Inserting an equal string again changes nothing.
    pub fn insert(&mut self, key: &str) {
        self.table.insert(key, ());
    }

    /// Returns the stored string equal to `key`
    pub fn get(&self, key: &str) -> Result<&str, TableError> {
        self.table.get_key_value(key).map(|(k, _)| k)
    }

    /// Removes `key`; absent keys are ignored
    pub fn delete(&mut self, key: &str) {
        self.table.delete(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn min_capacity(&self) -> usize {
        self.table.min_capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}
