//! The submitted-fields abstraction a host transport supplies for one
//! request.
//!
//! The core never parses query strings or multipart bodies; the host does
//! that and exposes the result through [`Submission`]. Values are borrowed
//! for the duration of one evaluation, which keeps file handles from
//! outliving the request that carried them.

use std::fmt;
use std::io::{self, Read};

use indexmap::IndexMap;

/// One uploaded file, owned by the host transport.
pub trait UploadedFile: fmt::Debug {
    /// The client-supplied file name.
    fn file_name(&self) -> &str;

    /// Open the upload's content for reading.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// A borrowed view of one submitted field value.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'s> {
    Text(&'s str),
    File(&'s dyn UploadedFile),
}

impl<'s> FieldValue<'s> {
    pub fn as_text(&self) -> Option<&'s str> {
        match self {
            FieldValue::Text(text) => Some(*text),
            FieldValue::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&'s dyn UploadedFile> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::File(file) => Some(*file),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldValue::File(_))
    }
}

/// Parsed request fields for one evaluation cycle.
// TODO: fields are single-valued; repeated form fields need a multi-value
// accessor here before list-shaped parameters can be supported.
pub trait Submission {
    /// Look up a field by name; `None` when the field was not submitted.
    fn value(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Whether the named field was submitted as a file upload.
    fn is_file(&self, name: &str) -> bool {
        matches!(self.value(name), Some(FieldValue::File(_)))
    }
}

/// An in-memory upload, for tests and non-streaming hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl MemoryUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl UploadedFile for MemoryUpload {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}

#[derive(Debug, Clone)]
enum StoredField {
    Text(String),
    File(MemoryUpload),
}

/// An in-memory [`Submission`], standing in for a parsed form.
#[derive(Debug, Clone, Default)]
pub struct MemorySubmission {
    fields: IndexMap<String, StoredField>,
}

impl MemorySubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), StoredField::Text(value.into()));
        self
    }

    /// Chainable file field.
    pub fn file(mut self, name: impl Into<String>, upload: MemoryUpload) -> Self {
        self.fields.insert(name.into(), StoredField::File(upload));
        self
    }
}

impl Submission for MemorySubmission {
    fn value(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields.get(name).map(|field| match field {
            StoredField::Text(text) => FieldValue::Text(text),
            StoredField::File(upload) => FieldValue::File(upload),
        })
    }
}
