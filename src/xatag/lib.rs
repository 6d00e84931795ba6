//! # Xatag Architecture
//!
//! Xatag is a **UI-agnostic tagging library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! Tags live in each file's extended attributes, one attribute per tag
//! group: plain tags in `user.org.xatag.tags`, keyed tags like
//! `genre:classical` in `user.org.xatag.tags.genre`. A file's tags travel
//! with it and need no database.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (tag expressions → Tag lists)          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The file-level tag operations                            │
//! │  - Built on the pure tag algebra and wire encoding          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract AttrStore trait                                 │
//! │  - XattrStore (production), InMemoryStore (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, algebra, storage), code takes
//! regular Rust arguments, returns regular Rust types, **never** writes to
//! stdout/stderr, and **never** calls `std::process::exit`. The same core
//! could serve a file-manager plugin or an indexing daemon.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: The file-level operations (add, set, delete, copy, list)
//! - [`algebra`]: Pure tag-dictionary operations (merge, subtract, select)
//! - [`model`]: Core data types (`Tag`, `TagSelector`) and tag parsing
//! - [`encoding`]: The `;`-joined attribute value wire format
//! - [`keys`]: Group-key ↔ attribute-name mapping
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Namespace constants and user configuration
//! - [`error`]: Error types

pub mod algebra;
pub mod api;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod model;
pub mod store;
