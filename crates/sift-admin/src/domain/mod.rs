//! Admin record shapes: products and categories.

mod category;
mod product;

pub use category::{Category, CategoryStatus};
pub use product::{Product, ProductStatus, StockLevel};
