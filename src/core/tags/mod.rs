//! core/tags/mod.rs
//!
//! Reading and writing the five template fields on real files.
//!
//! Public API:
//! - [`TagStore`] is the seam the CLI commands talk to.
//! - [`Id3Store`] implements it for MP3s with the `id3` crate.

mod read;
mod util;
mod write;

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{Field, FieldSet};

#[derive(Error, Debug)]
pub enum TagError {
    #[error("failed to read tags from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("failed to write tags to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
}

/// Where field values live for a given file.
pub trait TagStore {
    /// Fields present (and non-empty) on the file. No tag at all is an empty set.
    fn read(&mut self, path: &Path) -> Result<FieldSet, TagError>;

    /// Write the present fields. Absent fields are left as they are on disk.
    fn write(&mut self, path: &Path, fields: &FieldSet) -> Result<(), TagError>;

    /// Remove the given fields from the file.
    fn clear(&mut self, path: &Path, fields: &[Field]) -> Result<(), TagError>;
}

/// ID3v2 tags on MP3 files. Writes always produce v2.4.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Store;

impl TagStore for Id3Store {
    fn read(&mut self, path: &Path) -> Result<FieldSet, TagError> {
        read::read_fields(path)
    }

    fn write(&mut self, path: &Path, fields: &FieldSet) -> Result<(), TagError> {
        write::write_fields(path, fields)
    }

    fn clear(&mut self, path: &Path, fields: &[Field]) -> Result<(), TagError> {
        write::clear_fields(path, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Zeros are not an ID3 header, so the file starts out untagged.
    fn untagged_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, vec![0u8; 1024]).unwrap();
        path
    }

    #[test]
    fn untagged_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "blank.mp3");

        assert!(Id3Store.read(&path).unwrap().is_empty());
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "song.mp3");

        let mut fields = FieldSet::new();
        fields.set(Field::Artist, "Queen");
        fields.set(Field::Title, "Innuendo");
        fields.set(Field::Album, "Innuendo");
        fields.set(Field::Year, "1991");
        fields.set(Field::Genre, "Rock");

        let mut store = Id3Store;
        store.write(&path, &fields).unwrap();
        assert_eq!(store.read(&path).unwrap(), fields);
    }

    #[test]
    fn non_numeric_year_is_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "song.mp3");

        let mut fields = FieldSet::new();
        fields.set(Field::Year, "18/10/2020");

        let mut store = Id3Store;
        store.write(&path, &fields).unwrap();
        assert_eq!(store.read(&path).unwrap().get(Field::Year), Some("18/10/2020"));
    }

    #[test]
    fn absent_fields_are_left_alone_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "song.mp3");
        let mut store = Id3Store;

        let mut first = FieldSet::new();
        first.set(Field::Artist, "Queen");
        first.set(Field::Genre, "Rock");
        store.write(&path, &first).unwrap();

        let mut second = FieldSet::new();
        second.set(Field::Title, "Innuendo");
        store.write(&path, &second).unwrap();

        let read = store.read(&path).unwrap();
        assert_eq!(read.get(Field::Artist), Some("Queen"));
        assert_eq!(read.get(Field::Title), Some("Innuendo"));
        assert_eq!(read.get(Field::Genre), Some("Rock"));
    }

    #[test]
    fn clear_removes_only_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "song.mp3");
        let mut store = Id3Store;

        let mut fields = FieldSet::new();
        fields.set(Field::Artist, "Queen");
        fields.set(Field::Year, "1991");
        store.write(&path, &fields).unwrap();

        store.clear(&path, &[Field::Year]).unwrap();

        let read = store.read(&path).unwrap();
        assert_eq!(read.get(Field::Artist), Some("Queen"));
        assert_eq!(read.get(Field::Year), None);
    }

    #[test]
    fn nothing_to_change_leaves_file_bytes_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = untagged_file(&dir, "x.mp3");
        let before = std::fs::read(&path).unwrap();
        let mut store = Id3Store;

        store.write(&path, &FieldSet::new()).unwrap();
        store.clear(&path, &[]).unwrap();
        store.clear(&path, &[Field::Artist, Field::Year]).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), before);
    }
}
