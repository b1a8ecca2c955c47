//! Write or clear template fields on an MP3's ID3 tag.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike, Version};

use super::TagError;
use super::util::{YEAR_FRAME, frame_id};
use crate::core::types::{Field, FieldSet};

/// Load the existing tag, or start fresh if the file has none.
fn load(path: &Path) -> Result<Tag, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(Tag::new()),
        Err(source) => Err(TagError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn save(tag: &Tag, path: &Path) -> Result<(), TagError> {
    tag.write_to_path(path, Version::Id3v24)
        .map_err(|source| TagError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Remove every frame that may hold `field`. Returns true if any frame went away.
fn remove_field(tag: &mut Tag, field: Field) -> bool {
    let mut removed = tag.remove(frame_id(field));
    if field == Field::Year {
        removed.extend(tag.remove(YEAR_FRAME));
    }
    !removed.is_empty()
}

/// Set present fields; absent ones keep whatever the file already has.
pub(crate) fn write_fields(path: &Path, fields: &FieldSet) -> Result<(), TagError> {
    if fields.is_empty() {
        return Ok(());
    }
    let mut tag = load(path)?;

    for (field, value) in fields.status() {
        // Drop any stale TYER so the year is only stored once.
        remove_field(&mut tag, field);
        tag.set_text(frame_id(field), value);
    }

    save(&tag, path)
}

/// Files that hold none of `fields` are not rewritten.
pub(crate) fn clear_fields(path: &Path, fields: &[Field]) -> Result<(), TagError> {
    if fields.is_empty() {
        return Ok(());
    }
    let mut tag = load(path)?;

    let mut changed = false;
    for field in fields {
        changed |= remove_field(&mut tag, *field);
    }

    if !changed {
        return Ok(());
    }
    save(&tag, path)
}
