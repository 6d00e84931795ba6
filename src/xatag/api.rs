//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all tag operations, regardless of the UI being used.
//!
//! It dispatches to the right command, normalizes inputs (tag expression
//! strings into [`Tag`] lists), and returns structured `Result<CmdResult>`
//! values. It performs no I/O formatting of its own — no stdout, no
//! colors, no process exits. That stays in the binary.
//!
//! `XatagApi<S: AttrStore>` is generic over the attribute store:
//! production uses `XatagApi<XattrStore>`, tests use
//! `XatagApi<InMemoryStore>` and never need an xattr-capable filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::Tag;
use crate::store::AttrStore;
use std::path::{Path, PathBuf};

/// The main API facade for tag operations.
///
/// All UI clients (CLI, file-manager integration, etc.) should interact
/// through this API.
pub struct XatagApi<S: AttrStore> {
    store: S,
}

impl<S: AttrStore> XatagApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_tags(
        &mut self,
        paths: &[PathBuf],
        tags: &[Tag],
        recursive: bool,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, paths, tags, recursive)
    }

    pub fn set_tags(
        &mut self,
        paths: &[PathBuf],
        tags: &[Tag],
        all: bool,
        recursive: bool,
    ) -> Result<commands::CmdResult> {
        commands::set::run(&mut self.store, paths, tags, all, recursive)
    }

    pub fn delete_tags(
        &mut self,
        paths: &[PathBuf],
        tags: &[Tag],
        mode: DeleteMode,
        recursive: bool,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, paths, tags, mode, recursive)
    }

    pub fn copy_tags(
        &mut self,
        source: &Path,
        destinations: &[PathBuf],
        filter: Option<&[Tag]>,
        complement: bool,
        recursive: bool,
    ) -> Result<commands::CmdResult> {
        commands::copy::run(
            &mut self.store,
            source,
            destinations,
            filter,
            complement,
            recursive,
        )
    }

    pub fn list_tags(&self, paths: &[PathBuf], recursive: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, paths, recursive)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Parse tag expressions from the command line into a flat tag list.
pub fn parse_tags<I: AsRef<str>>(exprs: &[I]) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    for expr in exprs {
        tags.extend(Tag::from_string(expr.as_ref())?);
    }
    Ok(tags)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::delete::DeleteMode;
pub use crate::commands::{CmdMessage, CmdResult, FileTags, MessageLevel};
