//! The flat variable mapping shared by the template and the task builder.

use crate::error::{DeitygenError, Result};
use std::collections::BTreeMap;

/// Resolved placeholder values, keyed by placeholder name.
///
/// Backed by a `BTreeMap` so iteration order, and therefore every output
/// derived from it, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of `key`, or a `MissingVariable` error.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| DeitygenError::MissingVariable(key.to_string()))
    }

    /// Whether `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Apply a layer of pairs; later layers win on collision.
    pub fn apply<I, K, V>(&mut self, layer: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in layer {
            self.insert(key, value);
        }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        vars.apply(iter);
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_layers_win() {
        let mut vars = Variables::new();
        vars.apply([("color", "red"), ("time", "day")]);
        vars.apply([("color", "blue")]);

        assert_eq!(vars.get("color"), Some("blue"));
        assert_eq!(vars.get("time"), Some("day"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let vars: Variables = [("a", "1")].into_iter().collect();
        assert_eq!(vars.require("a").unwrap(), "1");

        let err = vars.require("deity_realm").unwrap_err();
        assert!(matches!(err, DeitygenError::MissingVariable(ref k) if k == "deity_realm"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let vars: Variables = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<_> = vars.as_map().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
