//! Tabular and list renderings for record-shaped return values.

use crate::render::escape_html;
use crate::text::title_case;
use crate::value::Record;

/// Render a sequence of records as a table.
///
/// Returns `None` for an empty sequence, and also, when `check_keys` is set,
/// when any record's key set differs from the first record's. Column order
/// follows the first record's field order; rows keep input order. With the
/// check disabled, cells for keys a record lacks render empty.
pub fn records_table(
    records: &[Record],
    classes: Option<&str>,
    check_keys: bool,
) -> Option<String> {
    let first = records.first()?;
    if check_keys && records.iter().any(|record| !first.same_keys(record)) {
        return None;
    }

    let mut out = String::new();
    match classes {
        Some(classes) => {
            out.push_str("<table class=\"");
            out.push_str(&escape_html(classes));
            out.push_str("\">");
        }
        None => out.push_str("<table>"),
    }

    out.push_str("<thead><tr>");
    for key in first.keys() {
        out.push_str("<th>");
        out.push_str(&escape_html(&title_case(key)));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>");

    out.push_str("<tbody>");
    for record in records {
        out.push_str("<tr>");
        for key in first.keys() {
            match record.get(key) {
                Some(value) => {
                    out.push_str("<td>");
                    out.push_str(&escape_html(&value.to_string()));
                    out.push_str("</td>");
                }
                None => out.push_str("<td></td>"),
            }
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    Some(out)
}

/// Render one record as a definition list of title/value pairs.
pub fn definition_list(record: &Record) -> String {
    let mut out = String::from("<dl>");
    for (key, value) in record.iter() {
        out.push_str("<dt>");
        out.push_str(&escape_html(&title_case(key)));
        out.push_str("</dt><dd>");
        out.push_str(&escape_html(&value.to_string()));
        out.push_str("</dd>");
    }
    out.push_str("</dl>");
    out
}

/// Fallback rendering for record sequences that failed the key-consistency
/// check: an ordered list with one definition list per record.
pub fn enumerated_records(records: &[Record]) -> String {
    let mut out = String::from("<ol class=\"record-list\">");
    for record in records {
        out.push_str("<li>");
        out.push_str(&definition_list(record));
        out.push_str("</li>");
    }
    out.push_str("</ol>");
    out
}
