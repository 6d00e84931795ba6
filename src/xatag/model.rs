use crate::config::NAMESPACE;
use crate::encoding::normalize_whitespace;
use crate::error::{Result, XatagError};
use std::fmt;

/// One tag: a grouping key and a value.
///
/// The default group (plain tags with no key) uses the empty string as its
/// key internally; constructing a tag with the display name `tags` as the
/// key normalizes to the default key. Tags compare and hash structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let key = if key == NAMESPACE.default_key_name {
            NAMESPACE.default_key.to_string()
        } else {
            key
        };
        Self {
            key,
            value: value.into(),
        }
    }

    /// Parse a compact tag expression into one tag per value.
    ///
    /// The expression is `key:value1;value2` or `value1;value2` (no key
    /// means the default group). The key/value divider is the last colon
    /// before the first `;`, so `multi:part:key` parses as key
    /// `multi:part`, value `key`. Values are whitespace-normalized; empty
    /// pieces are dropped. A bare `key:` yields a single empty-value tag,
    /// which the operations treat as a whole-group selector.
    pub fn from_string(s: &str) -> Result<Vec<Tag>> {
        if s.trim().is_empty() {
            return Err(XatagError::MalformedTagString(s.to_string()));
        }
        let limit = s.find(';').unwrap_or(s.len());
        let (key, rest) = match s[..limit].rfind(':') {
            Some(i) => (&s[..i], &s[i + 1..]),
            None => (NAMESPACE.default_key, s),
        };
        let values: Vec<String> = rest
            .split(';')
            .map(normalize_whitespace)
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            if rest.contains(';') {
                return Ok(Vec::new());
            }
            return Ok(vec![Tag::new(key, "")]);
        }
        Ok(values.into_iter().map(|v| Tag::new(key, v)).collect())
    }

    pub fn is_default_group(&self) -> bool {
        self.key == NAMESPACE.default_key
    }

    /// Render the tag in its compact string form. With `omit_default_key`,
    /// plain tags are rendered as the bare value.
    pub fn format(&self, omit_default_key: bool) -> String {
        if self.is_default_group() {
            if omit_default_key {
                return self.value.clone();
            }
            return format!("{}:{}", NAMESPACE.default_key_name, self.value);
        }
        format!("{}:{}", self.key, self.value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// A request item made explicit: either one specific value in a group, or
/// the group as a whole. An empty-value [`Tag`] converts to the
/// whole-group form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelector {
    WholeGroup(String),
    Value(Tag),
}

impl TagSelector {
    pub fn key(&self) -> &str {
        match self {
            TagSelector::WholeGroup(key) => key,
            TagSelector::Value(tag) => &tag.key,
        }
    }
}

impl From<Tag> for TagSelector {
    fn from(tag: Tag) -> Self {
        if tag.value.is_empty() {
            TagSelector::WholeGroup(tag.key)
        } else {
            TagSelector::Value(tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_default_key() {
        let t = Tag::new("genre", "classical");
        assert_eq!(t.key, "genre");
        assert_eq!(t.value, "classical");
        let t = Tag::new("", "favorite");
        assert_eq!(t.key, "");
        let t = Tag::new("tags", "favorite");
        assert_eq!(t.key, "");
    }

    #[test]
    fn from_string_simple() {
        let t = &Tag::from_string("simple-tag").unwrap()[0];
        assert_eq!(t.key, "");
        assert_eq!(t.value, "simple-tag");
        let t = &Tag::from_string("tags:simple-tag").unwrap()[0];
        assert_eq!(t.key, "");
        let t = &Tag::from_string("genre:classical").unwrap()[0];
        assert_eq!(t.key, "genre");
        assert_eq!(t.value, "classical");
    }

    #[test]
    fn from_string_value_list() {
        let ts = Tag::from_string("genre:classical;   rock;\n bluegrass\tstuff").unwrap();
        assert_eq!(ts.len(), 3);
        assert!(ts.iter().all(|t| t.key == "genre"));
        assert_eq!(ts[0].value, "classical");
        assert_eq!(ts[1].value, "rock");
        assert_eq!(ts[2].value, "bluegrass stuff");
    }

    #[test]
    fn from_string_multi_part_key() {
        let t = &Tag::from_string("multi:part:key").unwrap()[0];
        assert_eq!(t.key, "multi:part");
        assert_eq!(t.value, "key");
    }

    #[test]
    fn from_string_colon_in_value_after_semicolon() {
        // Only colons before the first `;` can divide key from value.
        let ts = Tag::from_string("genre:rock;other:stuff").unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(ts[0].value, "rock");
        assert_eq!(ts[1].value, "other:stuff");
    }

    #[test]
    fn from_string_bare_key_selects_whole_group() {
        let ts = Tag::from_string("genre:").unwrap();
        assert_eq!(ts.len(), 1);
        assert_eq!(ts[0].key, "genre");
        assert_eq!(ts[0].value, "");
    }

    #[test]
    fn from_string_empty_is_an_error() {
        assert!(Tag::from_string("").is_err());
        assert!(Tag::from_string("  \n").is_err());
    }

    #[test]
    fn format_default_group() {
        let t = Tag::new("", "simple-tag");
        assert_eq!(t.format(false), "tags:simple-tag");
        assert_eq!(t.format(true), "simple-tag");
        let t = Tag::new("genre", "classical");
        assert_eq!(t.format(false), "genre:classical");
        assert_eq!(t.to_string(), "genre:classical");
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Tag::new("", "tag"), Tag::new("", "tag"));
        assert_eq!(Tag::new("key", "val"), Tag::new("key", "val"));
        assert_ne!(Tag::new("", "tag"), Tag::new("key", "val"));
    }

    #[test]
    fn selector_from_tag() {
        assert_eq!(
            TagSelector::from(Tag::new("scope", "")),
            TagSelector::WholeGroup("scope".to_string())
        );
        assert_eq!(
            TagSelector::from(Tag::new("scope", "home")),
            TagSelector::Value(Tag::new("scope", "home"))
        );
        assert_eq!(TagSelector::from(Tag::new("scope", "home")).key(), "scope");
    }
}
