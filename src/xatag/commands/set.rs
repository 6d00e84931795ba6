use crate::algebra::TagPattern;
use crate::error::Result;
use crate::keys::group_key_to_attribute_name;
use crate::model::Tag;
use crate::store::AttrStore;
use std::path::{Path, PathBuf};

use super::helpers::{expand_paths, read_tag_keys, write_group};
use super::{CmdMessage, CmdResult};

/// Replace each requested group with exactly the requested values.
///
/// A request that is only a whole-group selector clears that group.
/// Groups not mentioned in the request are left untouched.
pub fn set_tags<S: AttrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<()> {
    let pattern = TagPattern::from_tags(tags);
    for (key, group) in pattern.iter() {
        let values: Vec<&String> = group.values.iter().collect();
        write_group(store, path, key, &values)?;
    }
    Ok(())
}

/// Like [`set_tags`], but groups not mentioned in the request are removed
/// first, so the file ends up with exactly the requested tag state.
pub fn set_all_tags<S: AttrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<()> {
    let pattern = TagPattern::from_tags(tags);
    for key in read_tag_keys(store, path)? {
        if pattern.get(&key).is_none() {
            store.remove(path, &group_key_to_attribute_name(&key))?;
        }
    }
    set_tags(store, path, tags)
}

pub fn run<S: AttrStore>(
    store: &mut S,
    paths: &[PathBuf],
    tags: &[Tag],
    all: bool,
    recursive: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for file in expand_paths(paths, recursive, &mut result)? {
        if all {
            set_all_tags(store, &file, tags)?;
        } else {
            set_tags(store, &file, tags)?;
        }
        result.add_message(CmdMessage::success(format!("Set tags on {}", file.display())));
    }
    Ok(result)
}
