//! Template parameters: the values a host later feeds to its renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::{DomainError, DomainResult};

/// Ordered mapping from parameter name to value, owned by a template.
///
/// Keys iterate in sorted order so hosts render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag {
    params: BTreeMap<String, String>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a parameter.
    pub fn define(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Check that every key in `keys` is defined with a non-empty value.
    ///
    /// Keys are checked in order; the first missing one is reported as an
    /// input error carrying `message`.
    pub fn require<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
        message: &str,
    ) -> DomainResult<()> {
        for key in keys {
            match self.lookup(key) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(DomainError::input(message, key)),
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (k, v) in iter {
            bag.define(k, v);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_lookup() {
        let mut bag = ParamBag::new();
        assert!(bag.is_empty());

        bag.define("name", "proto");
        assert_eq!(bag.lookup("name"), Some("proto"));
        assert!(bag.contains("name"));
        assert_eq!(bag.lookup("namespace"), None);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn define_is_idempotent_per_key() {
        let mut bag = ParamBag::new();
        bag.define("name", "foo");
        let once = bag.clone();
        bag.define("name", "foo");
        assert_eq!(bag, once);
    }

    #[test]
    fn iterates_in_key_order() {
        let bag: ParamBag = [("namespace", "mod"), ("name", "proto")].into_iter().collect();
        let keys: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "namespace"]);
    }

    #[test]
    fn require_reports_first_missing_key() {
        let bag: ParamBag = [("namespace", "mod")].into_iter().collect();
        let err = bag.require(["name", "namespace"], "missing").unwrap_err();
        assert_eq!(err, DomainError::input("missing", "name"));
    }

    #[test]
    fn require_rejects_empty_values() {
        let bag: ParamBag = [("name", "proto"), ("namespace", "")].into_iter().collect();
        let err = bag.require(["name", "namespace"], "missing").unwrap_err();
        assert_eq!(err, DomainError::input("missing", "namespace"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let bag: ParamBag = [("name", "proto")].into_iter().collect();
        assert_eq!(serde_json::to_string(&bag).unwrap(), r#"{"name":"proto"}"#);
    }
}
