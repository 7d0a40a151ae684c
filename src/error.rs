//! Error types for schema extraction and handler execution.
//!
//! Structural problems found while deriving a form schema are fatal for that
//! function's form section and surface as [`SchemaError`]. Runtime problems
//! with submitted data are not errors at all; they surface as
//! [`Outcome`](crate::handler::Outcome) variants so the caller can render a
//! correction prompt instead of tearing down the page.

use thiserror::Error;

pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// A structural defect in a handler's parameter declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A kind descriptor was neither `"text"`, `"file"`, nor an options
    /// list.
    #[error("invalid kind descriptor {descriptor} for parameter '{parameter}' of '{function}'")]
    InvalidKind {
        function: String,
        parameter: String,
        descriptor: String,
    },

    /// The same parameter name appears twice across the required and
    /// optional lists.
    #[error("duplicate parameter '{parameter}' declared for '{function}'")]
    DuplicateParameter { function: String, parameter: String },
}

/// A failure reported by a registered callable itself.
///
/// Handler failures are rendered into the response as an error fragment and
/// logged; they never abort the surrounding dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
