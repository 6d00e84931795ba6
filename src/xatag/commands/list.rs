use crate::error::Result;
use crate::store::AttrStore;
use std::path::PathBuf;

use super::helpers::{expand_paths, read_tags_as_dict};
use super::{CmdResult, FileTags};

/// Read-only listing of the tags on each file.
pub fn run<S: AttrStore>(store: &S, paths: &[PathBuf], recursive: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let files = expand_paths(paths, recursive, &mut result)?;
    let mut listed = Vec::with_capacity(files.len());
    for file in files {
        let tags = read_tags_as_dict(store, &file)?;
        listed.push(FileTags { path: file, tags });
    }
    Ok(result.with_listed(listed))
}
