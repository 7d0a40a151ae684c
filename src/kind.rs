//! Field kinds and the declaration surface that selects them.
//!
//! Integrators describe parameters with loose descriptors (the tokens
//! `"text"` and `"file"`, or a list of option labels); schema extraction
//! resolves those into concrete [`FieldKind`]s and rejects anything else.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Rendering and parsing strategy for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// File upload input.
    File,
    /// Fixed choice among the given options, in declared order.
    Choice(Vec<String>),
}

/// A raw kind descriptor as supplied by the integrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindDecl {
    /// `"text"` or `"file"`; anything else is rejected at extraction.
    Token(String),
    /// Option labels implying a choice field.
    Options(Vec<String>),
}

impl KindDecl {
    pub fn options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KindDecl::Options(options.into_iter().map(Into::into).collect())
    }

    /// Resolve to a concrete kind; `None` marks a malformed token.
    pub fn field_kind(&self) -> Option<FieldKind> {
        match self {
            KindDecl::Token(token) if token == "text" => Some(FieldKind::Text),
            KindDecl::Token(token) if token == "file" => Some(FieldKind::File),
            KindDecl::Token(_) => None,
            KindDecl::Options(options) => Some(FieldKind::Choice(options.clone())),
        }
    }

    /// The descriptor as written, for error messages.
    pub fn describe(&self) -> String {
        match self {
            KindDecl::Token(token) => format!("\"{token}\""),
            KindDecl::Options(options) => format!("{options:?}"),
        }
    }
}

impl From<&str> for KindDecl {
    fn from(token: &str) -> Self {
        KindDecl::Token(token.to_string())
    }
}

impl From<String> for KindDecl {
    fn from(token: String) -> Self {
        KindDecl::Token(token)
    }
}

impl From<Vec<String>> for KindDecl {
    fn from(options: Vec<String>) -> Self {
        KindDecl::Options(options)
    }
}

impl From<Vec<&str>> for KindDecl {
    fn from(options: Vec<&str>) -> Self {
        KindDecl::options(options)
    }
}

impl<const N: usize> From<[&str; N]> for KindDecl {
    fn from(options: [&str; N]) -> Self {
        KindDecl::options(options)
    }
}

/// Kind declarations for one function: parameter name to descriptor.
pub type KindMap = IndexMap<String, KindDecl>;

/// Startup kind configuration covering many functions.
///
/// Deserializes from a document shaped like
/// `{"field_trip": {"season": ["spring", "summer"], "notes": "file"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindConfig(IndexMap<String, KindMap>);

impl KindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Chainable declaration for building configs in code.
    pub fn declare(
        mut self,
        function: impl Into<String>,
        parameter: impl Into<String>,
        decl: impl Into<KindDecl>,
    ) -> Self {
        self.0
            .entry(function.into())
            .or_default()
            .insert(parameter.into(), decl.into());
        self
    }

    pub fn get(&self, function: &str) -> Option<&KindMap> {
        self.0.get(function)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KindMap)> {
        self.0.iter().map(|(name, kinds)| (name.as_str(), kinds))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
