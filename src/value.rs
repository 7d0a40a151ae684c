//! Return-value data model: scalars, records, and the closed set of
//! rendering categories.
//!
//! A callable picks its rendering by constructing a [`ReturnValue`]; nothing
//! is inferred from the runtime shape of the data, so every value a handler
//! can legally build has a rendering.

use std::fmt;

use indexmap::IndexMap;

/// A displayable cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

// Integer literals default to i32, so conversions need this impl too.
impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// An ordered mapping from field name to scalar value, describing one table
/// row or one definition list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Scalar>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert for literal construction.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field, replacing any previous value while keeping the
    /// field's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Key-set equality, ignoring order and values.
    pub fn same_keys(&self, other: &Record) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.keys().all(|k| other.fields.contains_key(k))
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// What a callable hands back for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    /// Plain text, rendered as paragraphs split on blank lines.
    Text(String),
    /// A sequence of records, rendered as a table when their key sets
    /// agree and as an enumerated list otherwise.
    Records(Vec<Record>),
    /// A single record, rendered as a definition list.
    Record(Record),
    /// Already-rendered markup, passed through verbatim.
    Markup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display_matches_cell_expectations() {
        assert_eq!(Scalar::Text("plain".to_string()).to_string(), "plain");
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_whole_floats_keep_one_decimal_place() {
        assert_eq!(Scalar::Float(2.0).to_string(), "2.0");
        assert_eq!(Scalar::Float(-7.0).to_string(), "-7.0");
        assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new().set("b", 1).set("a", 2).set("c", 3);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_record_insert_replaces_without_reordering() {
        let mut record = Record::new().set("x", 1).set("y", 2);
        record.insert("x", 10);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(record.get("x"), Some(&Scalar::Int(10)));
    }

    #[test]
    fn test_same_keys_ignores_order_but_not_membership() {
        let left = Record::new().set("a", 1).set("b", 2);
        let right = Record::new().set("b", 20).set("a", 10);
        let other = Record::new().set("a", 1).set("c", 2);
        assert!(left.same_keys(&right));
        assert!(!left.same_keys(&other));
        assert!(!left.same_keys(&Record::new()));
    }

    #[test]
    fn test_record_collects_from_pairs() {
        let record: Record = vec![("name", "ada"), ("note", "first")]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("note"), Some(&Scalar::Text("first".to_string())));
    }
}
