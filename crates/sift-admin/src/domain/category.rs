//! The category record shape.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sift_core::{FieldValue, Listable, RecordId};
use std::fmt;

/// Status of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Archived,
}

impl CategoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category row. Top-level categories have no parent; `description`
/// is optional and reads as `Null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent: Option<String>,
    pub product_count: u32,
    pub status: CategoryStatus,
    pub created_at: NaiveDate,
}

impl Listable for Category {
    fn id(&self) -> RecordId {
        RecordId(self.id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(self.name.clone())),
            "slug" => Some(FieldValue::from(self.slug.clone())),
            "description" => Some(FieldValue::from(self.description.clone())),
            "parent" => Some(FieldValue::from(self.parent.clone())),
            "product_count" => Some(FieldValue::Int(i64::from(self.product_count))),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "name",
            "slug",
            "description",
            "parent",
            "product_count",
            "status",
            "created_at",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "description"]
    }
}

// =============================================================================
// Tests
// =============================================================================
