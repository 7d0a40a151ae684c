//! Identifier and plain-text transforms shared by the renderers.

use crate::render::escape_html;

/// Turn a function or parameter identifier into a user-facing title.
///
/// Underscores become spaces and every alphabetic run is capitalized on its
/// first letter, so `"field_trip"` renders as `"Field Trip"` and
/// `"item2go"` as `"Item2Go"`.
pub fn title_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut in_word = false;
    for ch in identifier.chars() {
        if ch == '_' {
            out.push(' ');
            in_word = false;
        } else if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Split plain text on blank lines and wrap each segment in a paragraph
/// element. Segments are escaped; the result is markup.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|segment| format!("<p>{}</p>", escape_html(segment)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
