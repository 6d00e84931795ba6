use super::AttrStore;
use crate::error::Result;
use std::path::Path;

/// Production store backed by the platform's extended attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct XattrStore;

impl XattrStore {
    pub fn new() -> Self {
        Self
    }
}

impl AttrStore for XattrStore {
    fn list_names(&self, path: &Path) -> Result<Vec<String>> {
        let names = xattr::list(path)?;
        Ok(names.map(|n| n.to_string_lossy().into_owned()).collect())
    }

    fn get(&self, path: &Path, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(xattr::get(path, name)?)
    }

    fn set(&mut self, path: &Path, name: &str, value: &[u8]) -> Result<()> {
        xattr::set(path, name, value)?;
        Ok(())
    }

    fn remove(&mut self, path: &Path, name: &str) -> Result<()> {
        // The errno for a missing attribute differs per platform (ENODATA
        // vs ENOATTR), so probe instead of matching error kinds.
        if xattr::get(path, name)?.is_none() {
            return Ok(());
        }
        xattr::remove(path, name)?;
        Ok(())
    }
}
