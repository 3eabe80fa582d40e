//! # CLI Layer
//!
//! One possible client of the library. This is the only code that:
//! - parses arguments (clap)
//! - writes to stdout/stderr
//! - decides exit codes
//!
//! `setup` defines the argument surface, `commands` dispatches to
//! [`mdbadges::api::BadgeApi`] and prints, `render` turns command results
//! into styled text through the templates in `templates`.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::{report_error, run};
