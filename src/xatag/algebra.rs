//! Pure set operations over tag dictionaries.
//!
//! A [`TagDict`] is the decoded tag state of one file: group key to the
//! distinct values in that group. A [`TagPattern`] is the shape of a
//! request built from parsed tags, where an empty-value tag selects a
//! whole group. The three operations here — [`TagDict::merge`],
//! [`TagDict::subtract`], [`TagDict::select`] — are the basis for the
//! add/set/delete/copy file operations.

use crate::model::{Tag, TagSelector};
use std::collections::{BTreeMap, BTreeSet};

/// Tags of one file, grouped by key.
///
/// Invariant: no group maps to an empty set, and values are non-empty
/// normalized strings. Values are kept sorted and distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDict {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl TagDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut dict = Self::new();
        for tag in tags {
            dict.insert(&tag.key, &tag.value);
        }
        dict
    }

    /// Add one value to a group. Empty values are ignored.
    pub fn insert(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.groups
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// Add a whole group of values, dropping empties. A group that ends up
    /// empty is not created.
    pub fn insert_group<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            let value = value.into();
            self.insert(key, &value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Flatten back into tags, in key order then value order.
    pub fn to_tags(&self) -> Vec<Tag> {
        self.groups
            .iter()
            .flat_map(|(key, values)| values.iter().map(|v| Tag::new(key.clone(), v.clone())))
            .collect()
    }

    /// Union with `other`, per group.
    pub fn merge(&self, other: &TagDict) -> TagDict {
        let mut out = self.clone();
        for (key, values) in &other.groups {
            out.groups
                .entry(key.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
        out
    }

    /// Remove what `pattern` names. A whole-group selector drops its
    /// entire group; specific values are removed one by one. Groups
    /// emptied by the subtraction are dropped.
    pub fn subtract(&self, pattern: &TagPattern) -> TagDict {
        let mut out = TagDict::new();
        for (key, values) in &self.groups {
            match pattern.get(key) {
                Some(group) if group.whole_group => {}
                Some(group) => {
                    let remaining: BTreeSet<String> =
                        values.difference(&group.values).cloned().collect();
                    if !remaining.is_empty() {
                        out.groups.insert(key.clone(), remaining);
                    }
                }
                None => {
                    out.groups.insert(key.clone(), values.clone());
                }
            }
        }
        out
    }

    /// Keep what `pattern` names. Groups absent from the pattern are
    /// dropped; a whole-group selector keeps its group intact; specific
    /// values intersect.
    pub fn select(&self, pattern: &TagPattern) -> TagDict {
        let mut out = TagDict::new();
        for (key, values) in &self.groups {
            let Some(group) = pattern.get(key) else {
                continue;
            };
            if group.whole_group {
                out.groups.insert(key.clone(), values.clone());
            } else {
                let kept: BTreeSet<String> =
                    values.intersection(&group.values).cloned().collect();
                if !kept.is_empty() {
                    out.groups.insert(key.clone(), kept);
                }
            }
        }
        out
    }
}

/// What a request asks of one group: specific values, the whole group, or
/// both when a wildcard and values were given for the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPattern {
    pub whole_group: bool,
    pub values: BTreeSet<String>,
}

/// The grouped shape of a request, built from parsed tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPattern {
    groups: BTreeMap<String, GroupPattern>,
}

impl TagPattern {
    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut groups: BTreeMap<String, GroupPattern> = BTreeMap::new();
        for tag in tags {
            let entry = groups.entry(tag.key.clone()).or_default();
            match TagSelector::from(tag.clone()) {
                TagSelector::WholeGroup(_) => entry.whole_group = true,
                TagSelector::Value(tag) => {
                    entry.values.insert(tag.value);
                }
            }
        }
        Self { groups }
    }

    pub fn get(&self, key: &str) -> Option<&GroupPattern> {
        self.groups.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GroupPattern)> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
