//! tagger
//!
//! Tag MP3 files from the command line by matching file names against a
//! small template language (`%a - %t`), or rename files from their tags
//! with the same templates.
//!
//! - `core` holds everything that is not UI: the template engine, the
//!   target walker and the ID3 tag store.
//! - `cli` is the thin command line layer on top.

pub mod cli;
pub mod core;
