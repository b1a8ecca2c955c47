//! Substitute tag values into a template: `FieldSet` -> `String`.

use super::FormatError;
use super::scanner::{ESCAPE, SPECIFIER, Scanner};
use crate::core::types::FieldSet;

/// Render `template` against `fields`.
///
/// - `\X` emits `X`
/// - `%a`, `%t`, `%l`, `%y`, `%g` emit the field value (empty if absent)
/// - anything else is copied as-is
pub fn render(fields: &FieldSet, template: &str) -> Result<String, FormatError> {
    let mut scanner = Scanner::new(template);
    let mut output = String::with_capacity(template.len());

    while let Some(c) = scanner.next() {
        match c {
            ESCAPE => output.push(scanner.next_escaped()?),
            SPECIFIER => {
                let field = scanner.next_field()?;
                output.push_str(fields.get(field).unwrap_or_default());
            }
            _ => output.push(c),
        }
    }

    Ok(output)
}
