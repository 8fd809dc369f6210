//! Dashboard aggregates.
//!
//! The sales and order series are fixed sample data; the catalog summary
//! is computed from the seeded products.

use crate::domain::{Product, ProductStatus, StockLevel};
use std::collections::BTreeMap;

/// One month of sales, split by channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: &'static str,
    pub total: u32,
    pub online: u32,
    pub offline: u32,
}

/// Order counts by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusCount {
    pub status: &'static str,
    pub count: u32,
}

/// The monthly sales series.
pub fn sales_series() -> Vec<MonthlySales> {
    vec![
        MonthlySales { month: "2024-01", total: 4000, online: 2400, offline: 1600 },
        MonthlySales { month: "2024-02", total: 4500, online: 2800, offline: 1700 },
        MonthlySales { month: "2024-03", total: 6000, online: 3500, offline: 2500 },
        MonthlySales { month: "2024-04", total: 5800, online: 3000, offline: 2800 },
        MonthlySales { month: "2024-05", total: 7200, online: 4200, offline: 3000 },
    ]
}

/// The order status breakdown.
pub fn order_status_breakdown() -> Vec<OrderStatusCount> {
    vec![
        OrderStatusCount { status: "Completed", count: 755 },
        OrderStatusCount { status: "Pending", count: 120 },
        OrderStatusCount { status: "Canceled", count: 25 },
    ]
}

/// Headline numbers computed from the product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub published: usize,
    pub draft: usize,
    pub archived: usize,
    pub out_of_stock: usize,
    /// Sum of price * stock over the whole catalog.
    pub inventory_value: f64,
}

impl CatalogSummary {
    /// Compute the summary from a product collection.
    pub fn from_products(products: &[Product]) -> Self {
        let mut summary = Self {
            total_products: products.len(),
            published: 0,
            draft: 0,
            archived: 0,
            out_of_stock: 0,
            inventory_value: 0.0,
        };
        for product in products {
            match product.status {
                ProductStatus::Published => summary.published += 1,
                ProductStatus::Draft => summary.draft += 1,
                ProductStatus::Archived => summary.archived += 1,
            }
            if product.stock_level() == StockLevel::OutOfStock {
                summary.out_of_stock += 1;
            }
            summary.inventory_value += product.price * f64::from(product.stock);
        }
        summary
    }
}

/// Inventory value per category, highest first.
pub fn inventory_by_category(products: &[Product]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for product in products {
        *totals.entry(product.category.as_str()).or_default() +=
            product.price * f64::from(product.stock);
    }
    let mut rows: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    rows.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    rows
}

// =============================================================================
// Tests
// =============================================================================
