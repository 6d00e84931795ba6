use super::AttrStore;
use crate::error::{Result, XatagError};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// In-memory attribute store for testing.
/// Does NOT touch the filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as an existing file with no attributes.
    pub fn touch(&mut self, path: impl Into<PathBuf>) {
        self.files.entry(path.into()).or_default();
    }

    fn attrs(&self, path: &Path) -> Result<&BTreeMap<String, Vec<u8>>> {
        self.files
            .get(path)
            .ok_or_else(|| XatagError::Store(format!("No such file: {}", path.display())))
    }

    fn attrs_mut(&mut self, path: &Path) -> Result<&mut BTreeMap<String, Vec<u8>>> {
        self.files
            .get_mut(path)
            .ok_or_else(|| XatagError::Store(format!("No such file: {}", path.display())))
    }
}

impl AttrStore for InMemoryStore {
    fn list_names(&self, path: &Path) -> Result<Vec<String>> {
        Ok(self.attrs(path)?.keys().cloned().collect())
    }

    fn get(&self, path: &Path, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.attrs(path)?.get(name).cloned())
    }

    fn set(&mut self, path: &Path, name: &str, value: &[u8]) -> Result<()> {
        self.attrs_mut(path)?.insert(name.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, path: &Path, name: &str) -> Result<()> {
        self.attrs_mut(path)?.remove(name);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for a store pre-populated with tagged files.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_file(mut self, path: &str) -> Self {
            self.store.touch(path);
            self
        }

        pub fn with_attr(mut self, path: &str, name: &str, value: &str) -> Self {
            self.store.touch(path);
            self.store
                .set(Path::new(path), name, value.as_bytes())
                .unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_path_is_an_error() {
        let store = InMemoryStore::new();
        assert!(store.list_names(Path::new("/nope")).is_err());
    }

    #[test]
    fn set_get_list_remove() {
        let mut store = InMemoryStore::new();
        store.touch("/f");
        let path = Path::new("/f");

        assert_eq!(store.get(path, "user.a").unwrap(), None);
        store.set(path, "user.a", b"1").unwrap();
        assert_eq!(store.get(path, "user.a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.list_names(path).unwrap(), vec!["user.a"]);

        store.remove(path, "user.a").unwrap();
        assert_eq!(store.get(path, "user.a").unwrap(), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = InMemoryStore::new();
        store.touch("/f");
        store.remove(Path::new("/f"), "user.absent").unwrap();
    }
}
