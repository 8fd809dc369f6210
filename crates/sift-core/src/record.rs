//! Record and field types for list views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Stable record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A typed field scalar read out of a record.
///
/// Every value a list view can sort or filter on is one of these. A field
/// that exists on the shape but holds nothing reads as `Null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Total order across all field values.
    ///
    /// `Null` sorts before everything. `Int` and `Float` compare
    /// numerically against each other. Mixed non-numeric variants fall back
    /// to a fixed variant rank so the order stays total even for
    /// inconsistent record shapes.
    pub fn compare(&self, other: &Self) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Variant rank used to order mixed variants.
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Date(_) => 3,
        }
    }

    /// The text the search box matches against. `Null` reads as empty.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Check if the field holds nothing.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Int(n) => n.fmt(f),
            FieldValue::Float(n) => n.fmt(f),
            FieldValue::Text(s) => s.fmt(f),
            FieldValue::Date(d) => d.fmt(f),
        }
    }
}

// Equality must agree with `compare`, so it is written in terms of it
// rather than derived (Int(2) equals Float(2.0)).
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A record shape the query engine can list.
///
/// The engine never sees concrete domain types; it reads fields by name
/// through this trait. `field` returns `None` only for names the shape does
/// not define - a defined-but-empty field returns `Some(FieldValue::Null)`.
pub trait Listable {
    /// Unique, stable identifier.
    fn id(&self) -> RecordId;

    /// Read a field by name. `None` means the shape has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Every field name the shape recognizes for sorting and filtering.
    fn field_names() -> &'static [&'static str];

    /// The text fields the search box matches against.
    fn search_fields() -> &'static [&'static str];
}

// =============================================================================
// Tests
// =============================================================================
