//! # mdbadges Architecture
//!
//! mdbadges finds Shields.io badges by name and renders them as Markdown or
//! HTML. It is a library with a small CLI (`mdb`) on top, not the other way
//! around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Applies configuration defaults to requests               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user-facing operation                     │
//! │  - Returns `CmdResult` data plus leveled messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog, normalize, snippet, format, suggest,        │
//! │        resolve)                                             │
//! │  - Pure functions over an explicitly passed `&Catalog`      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution in one paragraph
//!
//! A lookup names a category and one or more badges. The category is matched
//! after normalization (`Social Media` and `social-media` are the same key);
//! badges are matched case-insensitively inside it. A missing category comes
//! back with a hint when one of the badges lives elsewhere. A missing badge
//! comes back with "did you mean" suggestions ranked by edit distance. Hits
//! are decoded from their stored Markdown snippet and re-rendered with the
//! requested style and link.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits. The two
//! exceptions to purity are explicit: `add` appends to a file it is handed,
//! and `copy` takes the clipboard as a callback.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the CLI
//! - [`commands`]: One module per operation
//! - [`catalog`]: The embedded badge data set and its invariants
//! - [`resolve`]: Category and badge lookup with hints and suggestions
//! - [`suggest`]: Similarity ranking
//! - [`snippet`]: Decoding stored snippets into alt text and URL
//! - [`format`]: Markdown/HTML rendering, styles, escaping
//! - [`normalize`]: Lookup keys and display labels
//! - [`config`]: Optional read-only configuration file
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod resolve;
pub mod snippet;
pub mod suggest;
