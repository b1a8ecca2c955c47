//! core/mod.rs
//!
//! The brain of the app:
//! - Turn a target into candidate files (filesystem walk)
//! - Match file names against templates / render templates from tags
//! - Read/write tags (metadata IO)
//!
//! The pipeline stays explicit and modular:
//!   (A) discover paths -> Vec<PathBuf>           (`library`)
//!   (B) label <-> fields via a template          (`format`)
//!   (C) fields <-> tags on disk                  (`tags`)
//!
//! The CLI only glues these together. `format` is pure: no IO, no logging.

pub mod format;
pub mod library;
pub mod tags;
pub mod types;
