//! Schema extraction: from declared parameter lists to a renderable form
//! description.

use std::collections::HashSet;

use crate::error::{SchemaError, SchemaResult};
use crate::kind::{FieldKind, KindMap};
use crate::text::title_case;

/// The declared parameter list for one callable: required names in call
/// order, then optional names in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// All parameter names, required first, each list in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// One renderable form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

/// Everything the form renderer needs for one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    /// The raw identifier, used for the hidden trigger field.
    pub function_name: String,
    /// Title-cased identifier for legends and buttons.
    pub title: String,
    /// Pre-rendered help markup, possibly empty.
    pub about: String,
    /// Required fields first, then optional, each in declared order.
    pub fields: Vec<FieldSpec>,
}

/// Derive the form schema for one callable.
///
/// Each parameter becomes a field whose kind comes from `kinds`, defaulting
/// to free text when undeclared. Extraction is pure: equal inputs always
/// produce equal schemas.
pub fn extract_schema(
    function_name: &str,
    about: &str,
    signature: &Signature,
    kinds: &KindMap,
) -> SchemaResult<FormSchema> {
    let mut seen = HashSet::with_capacity(signature.len());
    let mut fields = Vec::with_capacity(signature.len());

    for name in signature.names() {
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateParameter {
                function: function_name.to_string(),
                parameter: name.to_string(),
            });
        }
        let kind = match kinds.get(name) {
            None => FieldKind::Text,
            Some(decl) => decl.field_kind().ok_or_else(|| SchemaError::InvalidKind {
                function: function_name.to_string(),
                parameter: name.to_string(),
                descriptor: decl.describe(),
            })?,
        };
        fields.push(FieldSpec {
            name: name.to_string(),
            kind,
        });
    }

    Ok(FormSchema {
        function_name: function_name.to_string(),
        title: title_case(function_name),
        about: about.to_string(),
        fields,
    })
}
