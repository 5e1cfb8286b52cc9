pub use collections::{
    ConfigError, DeletePolicy, HashTable, StrSet, TableConfig, TableError, fnv1a,
};

/// Formats the outcome of looking `key` up in `set`
pub fn describe_lookup(set: &StrSet, key: &str) -> String {
    match set.get(key) {
        Ok(value) => format!("Value found: {value}"),
        Err(e) => format!("error: {e}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn describes_hit_and_miss() {
        let mut set = StrSet::new();
        set.insert("apples");

        assert_eq!(describe_lookup(&set, "apples"), "Value found: apples");
        assert_eq!(
            describe_lookup(&set, "sdf"),
            "error: Could not find key: sdf"
        );

        set.delete("apples");
        assert_eq!(
            describe_lookup(&set, "apples"),
            "error: Could not find key: apples"
        );
    }
}
