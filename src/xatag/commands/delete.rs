use crate::algebra::TagPattern;
use crate::error::Result;
use crate::keys::{group_key_to_attribute_name, is_xatag_attribute_name};
use crate::model::Tag;
use crate::store::AttrStore;
use std::path::{Path, PathBuf};

use super::helpers::{expand_paths, read_group, read_tag_keys, write_group};
use super::{CmdMessage, CmdResult};

/// Which tags a delete request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Delete the listed tags.
    Listed,
    /// Delete everything the listed tags do NOT match.
    Others,
    /// Delete every xatag attribute.
    All,
}

/// Remove the requested values from `path`.
///
/// A whole-group selector removes its attribute outright; so does removing
/// the last value of a group. Requests against absent groups are no-ops.
pub fn delete_tags<S: AttrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<()> {
    let pattern = TagPattern::from_tags(tags);
    for (key, group) in pattern.iter() {
        if group.whole_group {
            store.remove(path, &group_key_to_attribute_name(key))?;
            continue;
        }
        let current = read_group(store, path, key)?;
        if current.is_empty() {
            continue;
        }
        let remaining: Vec<&String> = current
            .iter()
            .filter(|v| !group.values.contains(*v))
            .collect();
        write_group(store, path, key, &remaining)?;
    }
    Ok(())
}

/// Keep only what the request names; everything else goes.
///
/// Unmentioned groups are deleted whole. A whole-group selector keeps its
/// group as-is; specific values keep the intersection with what is stored.
pub fn delete_other_tags<S: AttrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<()> {
    let pattern = TagPattern::from_tags(tags);
    for key in read_tag_keys(store, path)? {
        match pattern.get(&key) {
            None => store.remove(path, &group_key_to_attribute_name(&key))?,
            Some(group) if group.whole_group => {}
            Some(group) => {
                let current = read_group(store, path, &key)?;
                let kept: Vec<&String> = current
                    .iter()
                    .filter(|v| group.values.contains(*v))
                    .collect();
                write_group(store, path, &key, &kept)?;
            }
        }
    }
    Ok(())
}

/// Remove every xatag attribute on `path`. Foreign attributes stay.
pub fn delete_all_tags<S: AttrStore>(store: &mut S, path: &Path) -> Result<()> {
    for name in store.list_names(path)? {
        if is_xatag_attribute_name(&name) {
            store.remove(path, &name)?;
        }
    }
    Ok(())
}

pub fn run<S: AttrStore>(
    store: &mut S,
    paths: &[PathBuf],
    tags: &[Tag],
    mode: DeleteMode,
    recursive: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for file in expand_paths(paths, recursive, &mut result)? {
        match mode {
            DeleteMode::Listed => delete_tags(store, &file, tags)?,
            DeleteMode::Others => delete_other_tags(store, &file, tags)?,
            DeleteMode::All => delete_all_tags(store, &file)?,
        }
        result.add_message(CmdMessage::success(format!(
            "Deleted tags on {}",
            file.display()
        )));
    }
    Ok(result)
}
