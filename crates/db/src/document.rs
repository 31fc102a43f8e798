//! Schemaless documents as stored by the hosted database.
//!
//! A [`Document`] is an id plus a map of typed [`FieldValue`]s. Typed models
//! read from documents through [`FieldAccess`], which is lenient the same way
//! the hosted SDKs are: a missing or mistyped field reads as its zero value,
//! and a missing timestamp reads as "now".

use std::cmp::Ordering;
use std::collections::BTreeMap;

use folio_core::types::{DocumentId, Timestamp};

/// Field map of a document or of a nested map value.
pub type Fields = BTreeMap<String, FieldValue>;

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A single typed value inside a document.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(Timestamp),
    Array(Vec<FieldValue>),
    Map(Fields),
}

impl FieldValue {
    /// Cross-type rank used by ordered queries: null < bool < number <
    /// timestamp < string < array < map.
    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Double(_) => 2,
            FieldValue::Timestamp(_) => 3,
            FieldValue::String(_) => 4,
            FieldValue::Array(_) => 5,
            FieldValue::Map(_) => 6,
        }
    }

    /// Total order over values, matching the hosted database's query order.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Integer(a), Self::Double(b)) => cmp_f64(*a as f64, *b),
            (Self::Double(a), Self::Integer(b)) => cmp_f64(*a, *b as f64),
            (Self::Double(a), Self::Double(b)) => cmp_f64(*a, *b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Array(a), Self::Array(b)) => {
                for (x, y) in a.iter().zip(b) {
                    let ord = x.compare(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (Self::Map(a), Self::Map(b)) => {
                for ((ka, va), (kb, vb)) in a.iter().zip(b) {
                    let ord = ka.cmp(kb).then_with(|| va.compare(vb));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<Timestamp> for FieldValue {
    fn from(v: Timestamp) -> Self {
        FieldValue::Timestamp(v)
    }
}

impl From<Fields> for FieldValue {
    fn from(v: Fields) -> Self {
        FieldValue::Map(v)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        FieldValue::Array(v.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// FieldAccess
// ---------------------------------------------------------------------------

/// Lenient typed reads over a field map.
pub trait FieldAccess {
    fn get_value(&self, key: &str) -> Option<&FieldValue>;

    /// String field, or empty when missing or not a string.
    fn string(&self, key: &str) -> String {
        self.get_value(key)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Boolean field, or `false`.
    fn boolean(&self, key: &str) -> bool {
        matches!(self.get_value(key), Some(FieldValue::Boolean(true)))
    }

    /// Integer field, or `0`. Doubles are truncated.
    fn integer(&self, key: &str) -> i64 {
        match self.get_value(key) {
            Some(FieldValue::Integer(i)) => *i,
            Some(FieldValue::Double(d)) => *d as i64,
            _ => 0,
        }
    }

    /// Timestamp field, or the current time when absent.
    fn timestamp_or_now(&self, key: &str) -> Timestamp {
        match self.get_value(key) {
            Some(FieldValue::Timestamp(ts)) => *ts,
            _ => chrono::Utc::now(),
        }
    }

    /// Array of strings; non-string elements are skipped.
    fn string_list(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(FieldValue::as_str)
            .map(str::to_string)
            .collect()
    }

    /// Array field, or empty.
    fn array(&self, key: &str) -> &[FieldValue] {
        match self.get_value(key) {
            Some(FieldValue::Array(items)) => items,
            _ => &[],
        }
    }

    /// Nested map field, if present.
    fn map(&self, key: &str) -> Option<&Fields> {
        match self.get_value(key) {
            Some(FieldValue::Map(m)) => Some(m),
            _ => None,
        }
    }
}

impl FieldAccess for Fields {
    fn get_value(&self, key: &str) -> Option<&FieldValue> {
        self.get(key)
    }
}

// ---------------------------------------------------------------------------
// Document / ordering
// ---------------------------------------------------------------------------

/// A stored document: its store-assigned id and its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Single-field sort applied by the store to a collection query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }
}
