//! Pull tag values out of a label (usually a file name) using a template.
//!
//! The content and the template are walked by two independent scanners.
//! Outside a field they advance together, one character each. On `%x` the
//! template scanner runs ahead to collect the delimiter (the literal text
//! up to the next `%` or the end of the template), then the content scanner
//! consumes characters until that delimiter shows up.
//!
//! Behavior worth knowing:
//! - If either side runs out while matching literals, extraction stops and
//!   returns what it has so far. This is not an error.
//! - The delimiter is searched anywhere in the captured text and its first
//!   occurrence is removed. A value that itself contains the delimiter text
//!   is cut at that earlier occurrence.
//! - `\X` is a literal `X` and must match the content like any other literal.

use super::FormatError;
use super::scanner::{ESCAPE, SPECIFIER, Scanner};
use crate::core::types::FieldSet;

/// Where the next template character comes from on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateStep {
    /// Pull a fresh character from the template scanner.
    NeedTemplateChar,
    /// The delimiter scan already consumed this character (always a `%`).
    HaveTemplateChar(char),
}

/// What stopped the delimiter scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelimiterEnd {
    /// Another `%` follows; the field is bounded by the delimiter text.
    Specifier,
    /// The template ended; the field takes the rest of the content.
    EndOfTemplate,
}

#[derive(Debug)]
struct Delimiter {
    text: String,
    end: DelimiterEnd,
}

/// Extract the fields described by `template` from `content`.
///
/// ```
/// use tagger::core::format::extract;
/// use tagger::core::types::Field;
///
/// let fields = extract("Artist Name - Song Title", "%a - %t").unwrap();
/// assert_eq!(fields.get(Field::Artist), Some("Artist Name"));
/// assert_eq!(fields.get(Field::Title), Some("Song Title"));
/// ```
pub fn extract(content: &str, template: &str) -> Result<FieldSet, FormatError> {
    let mut content = Scanner::new(content);
    let mut template = Scanner::new(template);
    let mut fields = FieldSet::new();
    let mut step = TemplateStep::NeedTemplateChar;

    loop {
        let c = content.next();
        let f = match step {
            TemplateStep::NeedTemplateChar => template.next(),
            TemplateStep::HaveTemplateChar(f) => Some(f),
        };
        step = TemplateStep::NeedTemplateChar;

        let (Some(c), Some(f)) = (c, f) else {
            return Ok(fields);
        };

        match f {
            ESCAPE => {
                if template.next_escaped()? != c {
                    return Err(FormatError::InvalidFormat);
                }
            }
            SPECIFIER => {
                let field = template.next_field()?;
                let delimiter = scan_delimiter(&mut template)?;
                let value = capture(c, &mut content, &delimiter)?;
                fields.set(field, value);

                match delimiter.end {
                    DelimiterEnd::Specifier => step = TemplateStep::HaveTemplateChar(SPECIFIER),
                    DelimiterEnd::EndOfTemplate => return Ok(fields),
                }
            }
            literal if literal == c => {}
            _ => return Err(FormatError::InvalidFormat),
        }
    }
}

/// Collect the literal text after a specifier, up to the next `%` or the end.
///
/// Escapes are resolved here, so `\%` becomes part of the delimiter instead
/// of starting a new specifier.
fn scan_delimiter(template: &mut Scanner<'_>) -> Result<Delimiter, FormatError> {
    let mut text = String::new();

    loop {
        match template.next() {
            None => {
                return Ok(Delimiter {
                    text,
                    end: DelimiterEnd::EndOfTemplate,
                });
            }
            Some(SPECIFIER) => {
                return Ok(Delimiter {
                    text,
                    end: DelimiterEnd::Specifier,
                });
            }
            Some(ESCAPE) => text.push(template.next_escaped()?),
            Some(f) => text.push(f),
        }
    }
}

/// Consume content for one field, starting with the already-pulled `first`.
fn capture(
    first: char,
    content: &mut Scanner<'_>,
    delimiter: &Delimiter,
) -> Result<String, FormatError> {
    let mut buffer = String::from(first);

    match delimiter.end {
        DelimiterEnd::EndOfTemplate => {
            buffer.extend(content.by_ref());
            Ok(remove_first(&buffer, &delimiter.text))
        }
        DelimiterEnd::Specifier => loop {
            let c = content.next().ok_or(FormatError::InvalidFormat)?;
            buffer.push(c);
            if buffer.contains(delimiter.text.as_str()) {
                return Ok(remove_first(&buffer, &delimiter.text));
            }
        },
    }
}

fn remove_first(buffer: &str, delimiter: &str) -> String {
    buffer.replacen(delimiter, "", 1)
}
