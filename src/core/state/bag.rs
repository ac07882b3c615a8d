//! In-memory attribute bag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ResourceState;
use crate::core::domain::Memo;
use crate::core::types::AttributeKey;

/// A resource's attributes, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    attributes: BTreeMap<AttributeKey, String>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// All attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attributes whose key ends with `suffix`, as `(field_key, memo)` pairs.
    pub fn memos<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = (&'a str, Memo)> + 'a {
        self.attributes.iter().filter_map(move |(k, v)| {
            k.strip_suffix(suffix)
                .filter(|field| !field.is_empty())
                .map(|field| (field, Memo::new(v.clone())))
        })
    }
}

impl ResourceState for AttributeBag {
    fn get(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
