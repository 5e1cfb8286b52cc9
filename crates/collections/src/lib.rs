mod hashmap;

pub use hashmap::{
    ConfigError, DeletePolicy, HashTable, StrSet, TableConfig, TableError, fnv::fnv1a,
};
