//! Mapping between logical group keys and physical attribute names.
//!
//! Each tag group is stored in exactly one attribute: the default group in
//! `user.org.xatag.tags`, a named group in `user.org.xatag.tags.<key>`.
//! Names are also accepted without the `user.` prefix, since some
//! platforms report them that way.

use crate::config::NAMESPACE;
use crate::error::{Result, XatagError};
use once_cell::sync::Lazy;

static QUALIFIED_BASE: Lazy<String> =
    Lazy::new(|| format!("{}{}", NAMESPACE.user_prefix, NAMESPACE.base_name));

/// True iff `name` is an attribute this tool owns.
pub fn is_xatag_attribute_name(name: &str) -> bool {
    let bare = name.strip_prefix(NAMESPACE.user_prefix).unwrap_or(name);
    bare == NAMESPACE.base_name
        || bare
            .strip_prefix(NAMESPACE.base_name)
            .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1)
}

/// The attribute name holding the given group, user-prefixed.
pub fn group_key_to_attribute_name(key: &str) -> String {
    if key == NAMESPACE.default_key || key == NAMESPACE.default_key_name {
        QUALIFIED_BASE.clone()
    } else {
        format!("{}.{}", *QUALIFIED_BASE, key)
    }
}

/// The group key stored under the given attribute name.
pub fn attribute_name_to_group_key(name: &str) -> Result<String> {
    let bare = name.strip_prefix(NAMESPACE.user_prefix).unwrap_or(name);
    if bare == NAMESPACE.base_name {
        return Ok(NAMESPACE.default_key.to_string());
    }
    match bare
        .strip_prefix(NAMESPACE.base_name)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(XatagError::InvalidAttributeName(name.to_string())),
    }
}
