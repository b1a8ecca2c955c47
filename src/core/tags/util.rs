//! core/tags/util.rs
//! Frame lookups shared by tag reading/writing.

use id3::{Tag, TagLike};
use id3::frame::Content;

use crate::core::types::Field;

/// v2.4 recording time; holds the year as text.
pub(crate) const DATE_FRAME: &str = "TDRC";

/// v2.3 year frame, still common in the wild.
pub(crate) const YEAR_FRAME: &str = "TYER";

/// The text frame that stores `field`.
pub(crate) fn frame_id(field: Field) -> &'static str {
    match field {
        Field::Artist => "TPE1",
        Field::Title => "TIT2",
        Field::Album => "TALB",
        Field::Year => DATE_FRAME,
        Field::Genre => "TCON",
    }
}

/// Get a string value from a text frame. Blank values count as missing.
pub(crate) fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}
