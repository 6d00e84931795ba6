use crate::algebra::TagPattern;
use crate::error::Result;
use crate::model::Tag;
use crate::store::AttrStore;
use std::path::{Path, PathBuf};

use super::helpers::{expand_paths, read_group, read_tags_as_dict, write_group};
use super::{CmdMessage, CmdResult};

/// Copy tags from `src` onto `dst`, merging group-by-group.
///
/// With a filter, only the selected tags are copied — or everything but
/// them when `complement` is set. The source is never modified, and
/// destination tags outside the copied groups are untouched.
pub fn copy_tags<S: AttrStore>(
    store: &mut S,
    src: &Path,
    dst: &Path,
    filter: Option<&[Tag]>,
    complement: bool,
) -> Result<()> {
    let source = read_tags_as_dict(store, src)?;
    let chosen = match filter {
        Some(tags) => {
            let pattern = TagPattern::from_tags(tags);
            if complement {
                source.subtract(&pattern)
            } else {
                source.select(&pattern)
            }
        }
        None => source,
    };
    for (key, values) in chosen.iter() {
        let mut current = read_group(store, dst, key)?;
        current.extend(values.iter().cloned());
        write_group(store, dst, key, &current)?;
    }
    Ok(())
}

pub fn run<S: AttrStore>(
    store: &mut S,
    src: &Path,
    destinations: &[PathBuf],
    filter: Option<&[Tag]>,
    complement: bool,
    recursive: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for file in expand_paths(destinations, recursive, &mut result)? {
        copy_tags(store, src, &file, filter, complement)?;
        result.add_message(CmdMessage::success(format!(
            "Copied tags from {} to {}",
            src.display(),
            file.display()
        )));
    }
    Ok(result)
}
