//! Markup rendering: escaping, shared response fragments, and the
//! return-value dispatch.

pub mod form;
pub mod table;

use crate::text;
use crate::value::ReturnValue;

/// Escape HTML special characters in text content and attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a callable's return value as markup.
///
/// Text becomes paragraphs. Record sequences become a table, falling back to
/// an enumerated rendering when the rows' key sets disagree. A single record
/// becomes a definition list, and markup passes through untouched.
pub fn render_return(value: ReturnValue) -> String {
    match value {
        ReturnValue::Text(body) => text::paragraphs(&body),
        ReturnValue::Records(records) => table::records_table(&records, None, true)
            .unwrap_or_else(|| table::enumerated_records(&records)),
        ReturnValue::Record(record) => table::definition_list(&record),
        ReturnValue::Markup(markup) => markup,
    }
}

/// The correction prompt for a submission whose required arguments were
/// missing, names in declaration order.
pub fn missing_arguments(names: &[String]) -> String {
    let joined = names
        .iter()
        .map(|name| escape_html(name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("<p class=\"form-error\"><strong>Error:</strong> missing arguments: {joined}.</p>")
}

/// The user-visible fragment for a callable that reported a failure.
pub fn handler_failure(function: &str, message: &str) -> String {
    format!(
        "<p class=\"form-error\"><strong>Error:</strong> {} failed: {}.</p>",
        escape_html(function),
        escape_html(message),
    )
}

/// Wrap preformatted plain text for use as a form's about markup.
pub fn help_section(text: &str) -> String {
    format!(
        "<section class=\"form-help\">\n<pre>\n{}\n</pre>\n</section>\n",
        escape_html(text)
    )
}
