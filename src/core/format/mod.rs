//! core/format/mod.rs
//!
//! The template language shared by tagging and renaming.
//!
//! - `%a` artist, `%t` title, `%l` album, `%y` year, `%g` genre
//! - `\X` is the literal character `X`
//! - everything else is literal text
//!
//! Public API:
//! - [`extract`] reads fields out of a label: `"Queen - Innuendo"` + `"%a - %t"`
//! - [`render`] writes fields into a template: the same thing, backwards
//!
//! Both parse the template fresh on every call; there is no compiled form.

mod extract;
mod render;
mod scanner;

pub use extract::extract;
pub use render::render;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Unknown or cut-off specifier, dangling escape, a delimiter that never
    /// shows up in the content, or a literal that does not match.
    #[error("invalid format")]
    InvalidFormat,
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::core::types::{Field, FieldSet};
    use proptest::prelude::*;

    // Values that can never contain the delimiters used below.
    fn value() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.,']{1,16}"
    }

    fn literal_text() -> impl Strategy<Value = String> {
        "[a-w ._-]{1,24}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn render_inverts_extract(
            artist in value(),
            title in value(),
            year in value(),
        ) {
            let template = "%a - %t (%y)";
            let content = format!("{artist} - {title} ({year})");

            let fields = extract(&content, template).unwrap();
            prop_assert_eq!(fields.get(Field::Artist), Some(artist.as_str()));
            prop_assert_eq!(fields.get(Field::Title), Some(title.as_str()));
            prop_assert_eq!(fields.get(Field::Year), Some(year.as_str()));
            prop_assert_eq!(render(&fields, template).unwrap(), content);
        }

        #[test]
        fn literal_template_matches_itself(text in literal_text()) {
            prop_assert_eq!(extract(&text, &text), Ok(FieldSet::new()));
        }

        #[test]
        fn literal_template_rejects_changed_char(text in literal_text(), at in any::<usize>()) {
            let mut chars: Vec<char> = text.chars().collect();
            let i = at % chars.len();
            chars[i] = if chars[i] == 'x' { 'y' } else { 'x' };
            let content: String = chars.into_iter().collect();

            prop_assert_eq!(extract(&content, &text), Err(FormatError::InvalidFormat));
        }

        #[test]
        fn literal_template_renders_unchanged(text in literal_text(), genre in value()) {
            let mut fields = FieldSet::new();
            fields.set(Field::Genre, genre);
            prop_assert_eq!(render(&fields, &text).unwrap(), text);
        }
    }

    #[test]
    fn round_trip_breaks_when_delimiter_recurs_in_value() {
        let template = "%a - %t";
        let content = "Crosby - Stills - Nash";

        let fields = extract(content, template).unwrap();
        assert_eq!(fields.get(Field::Artist), Some("Crosby"));

        // Rendering happens to reproduce the content, but the artist is wrong.
        assert_eq!(render(&fields, template).unwrap(), content);

        let mut intended = FieldSet::new();
        intended.set(Field::Artist, "Crosby - Stills");
        intended.set(Field::Title, "Nash");
        assert_ne!(fields, intended);
    }

    #[test]
    fn round_trip_breaks_with_trailing_delimiter_in_value() {
        let template = "%t (%y)";
        let content = "Song (Remix) (1999)";

        let fields = extract(content, template).unwrap();
        assert_eq!(fields.get(Field::Title), Some("Song"));
        assert_eq!(fields.get(Field::Year), Some("Remix (1999)"));
        assert_eq!(render(&fields, template).unwrap(), "Song (Remix (1999))");
    }
}
