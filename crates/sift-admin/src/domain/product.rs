//! The product record shape.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sift_core::{FieldValue, Listable, RecordId};
use std::fmt;

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Published,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Published => "published",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock classification shown next to the unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    /// Classify a unit count: more than 10 is in stock, anything positive
    /// is low, zero is out.
    pub fn from_units(stock: u32) -> Self {
        if stock > 10 {
            StockLevel::InStock
        } else if stock > 0 {
            StockLevel::LowStock
        } else {
            StockLevel::OutOfStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::OutOfStock => "Out of Stock",
        }
    }
}

/// One product row in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub status: ProductStatus,
    pub created_at: NaiveDate,
}

impl Product {
    /// Stock classification for this product.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_units(self.stock)
    }
}

impl Listable for Product {
    fn id(&self) -> RecordId {
        RecordId(self.id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(self.name.clone())),
            "sku" => Some(FieldValue::from(self.sku.clone())),
            "price" => Some(FieldValue::Float(self.price)),
            "stock" => Some(FieldValue::Int(i64::from(self.stock))),
            "category" => Some(FieldValue::from(self.category.clone())),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "name",
            "sku",
            "price",
            "stock",
            "category",
            "status",
            "created_at",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "sku"]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_bounds() {
        assert_eq!(StockLevel::from_units(11), StockLevel::InStock);
        assert_eq!(StockLevel::from_units(10), StockLevel::LowStock);
        assert_eq!(StockLevel::from_units(1), StockLevel::LowStock);
        assert_eq!(StockLevel::from_units(0), StockLevel::OutOfStock);
    }

    #[test]
    fn test_every_declared_field_is_readable() {
        let product = Product {
            id: 1,
            name: "Premium Wireless Headphones".to_string(),
            sku: "PH-7890".to_string(),
            price: 299.99,
            stock: 25,
            category: "Electronics".to_string(),
            status: ProductStatus::Published,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        for name in Product::field_names() {
            assert!(product.field(name).is_some(), "field {name} not readable");
        }
        assert!(product.field("image").is_none());
    }
}
