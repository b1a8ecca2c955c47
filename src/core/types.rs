//! Core data types shared between the template engine, the tag store and the CLI.
//!
//! Rule of thumb:
//! - These types are "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `FieldSet` represents the five tags we care about for ONE audio file.

use std::collections::BTreeMap;
use std::fmt;

/// One of the five tags the template language knows about.
///
/// The derive order matters: `FieldSet::status` lists fields in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Artist,
    Title,
    Album,
    Year,
    Genre,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Artist,
        Field::Title,
        Field::Album,
        Field::Year,
        Field::Genre,
    ];

    /// Map a specifier letter (the `a` in `%a`) to its field.
    pub fn from_code(code: char) -> Option<Field> {
        match code {
            'a' => Some(Field::Artist),
            't' => Some(Field::Title),
            'l' => Some(Field::Album),
            'y' => Some(Field::Year),
            'g' => Some(Field::Genre),
            _ => None,
        }
    }

    /// Lowercase name used in status listings ("artist", "title", ...).
    pub fn name(self) -> &'static str {
        match self {
            Field::Artist => "artist",
            Field::Title => "title",
            Field::Album => "album",
            Field::Year => "year",
            Field::Genre => "genre",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The tag values for a single file.
///
/// Each slot is `Option<String>`:
/// - `Some(value)` = we have it, and `value` is never empty
/// - `None` = missing, never written, or cleared
///
/// Blank values are not reported as present anywhere in the app, so
/// `set` silently drops them instead of storing `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    artist: Option<String>,
    title: Option<String>,
    album: Option<String>,
    year: Option<String>,
    genre: Option<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `field`. Empty values are a no-op.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        *self.slot_mut(field) = Some(value);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.slot(*field).is_none())
    }

    /// Present fields only, keyed by field, in `Field` order.
    pub fn status(&self) -> BTreeMap<Field, &str> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
            .collect()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Artist => &self.artist,
            Field::Title => &self.title,
            Field::Album => &self.album,
            Field::Year => &self.year,
            Field::Genre => &self.genre,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Artist => &mut self.artist,
            Field::Title => &mut self.title,
            Field::Album => &mut self.album,
            Field::Year => &mut self.year,
            Field::Genre => &mut self.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_never_stored() {
        let mut fields = FieldSet::new();
        fields.set(Field::Year, "");
        assert_eq!(fields.get(Field::Year), None);
        assert!(fields.is_empty());
    }

    #[test]
    fn empty_value_does_not_overwrite_existing() {
        let mut fields = FieldSet::new();
        fields.set(Field::Genre, "Jazz");
        fields.set(Field::Genre, String::new());
        assert_eq!(fields.get(Field::Genre), Some("Jazz"));
    }

    #[test]
    fn status_lists_present_fields_in_order() {
        let mut fields = FieldSet::new();
        fields.set(Field::Genre, "Rock");
        fields.set(Field::Artist, "Queen");

        let status: Vec<_> = fields.status().into_iter().collect();
        assert_eq!(status, vec![(Field::Artist, "Queen"), (Field::Genre, "Rock")]);
    }

    #[test]
    fn codes_map_to_fields() {
        let codes: Vec<_> = "atlyg".chars().filter_map(Field::from_code).collect();
        assert_eq!(codes, Field::ALL);
        assert_eq!(Field::from_code('z'), None);
        assert_eq!(Field::from_code('A'), None);
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Field::Album.to_string(), "album");
    }
}
