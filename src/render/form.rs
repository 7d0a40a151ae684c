//! Form rendering: one labelled control per schema field, plus the hidden
//! trigger field that routes a submission back to its function.

use crate::kind::FieldKind;
use crate::render::escape_html;
use crate::schema::{FieldSpec, FormSchema};
use crate::text::title_case;

/// Render the complete input form for a schema.
///
/// The about markup is included verbatim; everything else dynamic is
/// escaped. Equal schemas always produce byte-identical markup.
pub fn form_markup(schema: &FormSchema) -> String {
    let title = escape_html(&schema.title);

    let mut out = String::new();
    out.push_str("<form enctype=\"multipart/form-data\" method=\"post\">\n");
    out.push_str("<fieldset>\n");
    out.push_str("<legend>");
    out.push_str(&title);
    out.push_str("</legend>\n");

    if !schema.about.is_empty() {
        out.push_str(&schema.about);
        if !schema.about.ends_with('\n') {
            out.push('\n');
        }
    }

    push_trigger_field(&mut out, &schema.function_name);
    for field in &schema.fields {
        push_field(&mut out, field);
    }

    out.push_str("<input type=\"submit\" value=\"Process: ");
    out.push_str(&title);
    out.push_str("\">\n");
    out.push_str("</fieldset>\n");
    out.push_str("</form>\n");
    out
}

/// The hidden field whose presence marks a submission as targeting this
/// function. Name and value both carry the raw identifier.
fn push_trigger_field(out: &mut String, function_name: &str) {
    let name = escape_html(function_name);
    out.push_str("<input type=\"hidden\" id=\"");
    out.push_str(&name);
    out.push_str("\" name=\"");
    out.push_str(&name);
    out.push_str("\" value=\"");
    out.push_str(&name);
    out.push_str("\">\n");
}

fn push_field(out: &mut String, field: &FieldSpec) {
    let name = escape_html(&field.name);
    let label = escape_html(&title_case(&field.name));
    match &field.kind {
        FieldKind::Text => push_input(out, &name, &label, "text"),
        FieldKind::File => push_input(out, &name, &label, "file"),
        FieldKind::Choice(options) => {
            push_label(out, &name, &label);
            out.push_str("<select name=\"");
            out.push_str(&name);
            out.push_str("\" id=\"");
            out.push_str(&name);
            out.push_str("\">\n");
            for option in options {
                out.push_str("<option value=\"");
                out.push_str(&escape_html(option));
                out.push_str("\">");
                out.push_str(&escape_html(&title_case(option)));
                out.push_str("</option>\n");
            }
            out.push_str("</select>\n<br>\n");
        }
    }
}

fn push_input(out: &mut String, name: &str, label: &str, input_type: &str) {
    push_label(out, name, label);
    out.push_str("<input type=\"");
    out.push_str(input_type);
    out.push_str("\" name=\"");
    out.push_str(name);
    out.push_str("\" id=\"");
    out.push_str(name);
    out.push_str("\">\n<br>\n");
}

fn push_label(out: &mut String, name: &str, label: &str) {
    out.push_str("<label for=\"");
    out.push_str(name);
    out.push_str("\">");
    out.push_str(label);
    out.push_str("</label>\n");
}
