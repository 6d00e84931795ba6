use crate::algebra::TagPattern;
use crate::error::Result;
use crate::model::Tag;
use crate::store::AttrStore;
use std::path::{Path, PathBuf};

use super::helpers::{expand_paths, read_group, write_group};
use super::{CmdMessage, CmdResult};

/// Add `tags` to what is already on `path`, per group.
///
/// Requested values union with the stored ones. A whole-group selector
/// (`key:` with no value) contributes nothing here.
pub fn add_tags<S: AttrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<()> {
    let pattern = TagPattern::from_tags(tags);
    for (key, group) in pattern.iter() {
        if group.values.is_empty() {
            continue;
        }
        let mut current = read_group(store, path, key)?;
        current.extend(group.values.iter().cloned());
        write_group(store, path, key, &current)?;
    }
    Ok(())
}

pub fn run<S: AttrStore>(
    store: &mut S,
    paths: &[PathBuf],
    tags: &[Tag],
    recursive: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for file in expand_paths(paths, recursive, &mut result)? {
        add_tags(store, &file, tags)?;
        result.add_message(CmdMessage::success(format!("Tagged {}", file.display())));
    }
    Ok(result)
}
