use crate::algebra::TagDict;
use crate::encoding::{list_to_xattr_value, xattr_value_to_list};
use crate::error::Result;
use crate::keys::{attribute_name_to_group_key, group_key_to_attribute_name, is_xatag_attribute_name};
use crate::store::AttrStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{CmdMessage, CmdResult};

/// Group keys of every xatag attribute on `path`.
pub fn read_tag_keys<S: AttrStore>(store: &S, path: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for name in store.list_names(path)? {
        if is_xatag_attribute_name(&name) {
            out.push(attribute_name_to_group_key(&name)?);
        }
    }
    Ok(out)
}

/// All tag groups on `path`, decoded into a dictionary.
pub fn read_tags_as_dict<S: AttrStore>(store: &S, path: &Path) -> Result<TagDict> {
    let mut dict = TagDict::new();
    for key in read_tag_keys(store, path)? {
        dict.insert_group(&key, read_group(store, path, &key)?);
    }
    Ok(dict)
}

/// Current values of one group, or empty when the attribute is absent.
pub fn read_group<S: AttrStore>(store: &S, path: &Path, key: &str) -> Result<Vec<String>> {
    let name = group_key_to_attribute_name(key);
    match store.get(path, &name)? {
        Some(raw) => Ok(xattr_value_to_list(&String::from_utf8_lossy(&raw))),
        None => Ok(Vec::new()),
    }
}

/// Write one group, removing the attribute when the encoded value is empty.
pub fn write_group<S, V>(store: &mut S, path: &Path, key: &str, group: &[V]) -> Result<()>
where
    S: AttrStore,
    V: AsRef<str>,
{
    let name = group_key_to_attribute_name(key);
    let encoded = list_to_xattr_value(group);
    if encoded.is_empty() {
        store.remove(path, &name)
    } else {
        store.set(path, &name, encoded.as_bytes())
    }
}

/// Expand path arguments into plain files, walking directories when
/// `recursive`. Directory arguments are skipped (with a warning) otherwise.
pub fn expand_paths(
    paths: &[PathBuf],
    recursive: bool,
    result: &mut CmdResult,
) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            if recursive {
                walk_dir(path, &mut out)?;
            } else {
                result.add_message(CmdMessage::warning(format!(
                    "Skipping directory {} (use --recursive)",
                    path.display()
                )));
            }
        } else {
            out.push(path.clone());
        }
    }
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();
    for entry in entries {
        if entry.is_dir() {
            walk_dir(&entry, out)?;
        } else {
            out.push(entry);
        }
    }
    Ok(())
}
