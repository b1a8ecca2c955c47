//! Read the template fields from an MP3's ID3 tag.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike};

use super::TagError;
use super::util::{DATE_FRAME, YEAR_FRAME, frame_id, text_frame};
use crate::core::types::{Field, FieldSet};

pub(crate) fn read_fields(path: &Path) -> Result<FieldSet, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(fields_from_tag(&tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
            tracing::debug!("no tag in {}", path.display());
            Ok(FieldSet::new())
        }
        Err(source) => Err(TagError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn fields_from_tag(tag: &Tag) -> FieldSet {
    let mut fields = FieldSet::new();

    for field in [Field::Artist, Field::Title, Field::Album, Field::Genre] {
        if let Some(value) = text_frame(tag, frame_id(field)) {
            fields.set(field, value);
        }
    }

    // Year: the full date text first, then the old TYER frame, then
    // whatever the crate can parse as a number.
    let year = text_frame(tag, DATE_FRAME)
        .or_else(|| text_frame(tag, YEAR_FRAME))
        .or_else(|| tag.year().map(|y| y.to_string()));
    if let Some(year) = year {
        fields.set(Field::Year, year);
    }

    fields
}
