//! # Storage Layer
//!
//! This module defines the attribute-store abstraction for xatag. The
//! [`AttrStore`] trait is the only thing the tag operations know about a
//! file's extended attributes.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no xattr-capable filesystem needed)
//! - Keep the tag algebra and file operations **decoupled** from syscalls
//!
//! ## Implementations
//!
//! - [`fs::XattrStore`]: Production backend over the platform's extended
//!   attributes, one attribute per tag group
//! - [`memory::InMemoryStore`]: In-memory attribute maps for testing
//!
//! ## Contract
//!
//! One attribute holds one tag group. Each mutation is a single store
//! call, so concurrent writers race per attribute with last-write-wins;
//! no locking is performed here. Removing an attribute that is already
//! absent succeeds, which makes deletes idempotent.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface to one file's extended attributes.
pub trait AttrStore {
    /// List every attribute name present on `path`.
    fn list_names(&self, path: &Path) -> Result<Vec<String>>;

    /// Read one attribute, or `None` when it is absent.
    fn get(&self, path: &Path, name: &str) -> Result<Option<Vec<u8>>>;

    /// Create or overwrite one attribute.
    fn set(&mut self, path: &Path, name: &str, value: &[u8]) -> Result<()>;

    /// Remove one attribute. Removing an absent attribute is not an error.
    fn remove(&mut self, path: &Path, name: &str) -> Result<()>;
}
