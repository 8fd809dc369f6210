//! The seeded in-memory catalog.
//!
//! Stands in for the external data source: the engine only ever sees the
//! collections these functions return. Enough rows to exercise more than
//! one page at the default page size.

use crate::domain::{Category, CategoryStatus, Product, ProductStatus};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn product(
    id: u64,
    name: &str,
    sku: &str,
    price: f64,
    stock: u32,
    category: &str,
    status: ProductStatus,
    created_at: NaiveDate,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        price,
        stock,
        category: category.to_string(),
        status,
        created_at,
    }
}

/// The seeded product list.
pub fn products() -> Vec<Product> {
    use ProductStatus::*;
    vec![
        product(1, "Premium Wireless Headphones", "PH-7890", 299.99, 25, "Electronics", Published, date(2024, 3, 15)),
        product(2, "Organic Cotton T-Shirt", "TS-4567", 39.99, 0, "Fashion", Draft, date(2024, 4, 20)),
        product(3, "Smart Home Speaker", "SP-2310", 129.00, 8, "Electronics", Published, date(2024, 2, 1)),
        product(4, "Ceramic Pour-Over Kettle", "KT-8812", 64.50, 41, "Home & Kitchen", Published, date(2024, 1, 9)),
        product(5, "Linen Summer Dress", "DR-3302", 89.95, 12, "Fashion", Published, date(2024, 5, 2)),
        product(6, "Noise Cancelling Earbuds", "EB-1150", 149.99, 3, "Electronics", Draft, date(2024, 4, 11)),
        product(7, "Cast Iron Skillet", "SK-7020", 45.00, 60, "Home & Kitchen", Published, date(2023, 11, 30)),
        product(8, "Hardcover Notebook", "NB-0041", 14.99, 200, "Books", Published, date(2024, 1, 22)),
        product(9, "Vintage Denim Jacket", "JK-5571", 119.00, 0, "Fashion", Archived, date(2023, 9, 14)),
        product(10, "USB-C Charging Hub", "HB-6634", 59.99, 17, "Electronics", Published, date(2024, 5, 18)),
        product(11, "Bamboo Cutting Board", "CB-2208", 27.50, 9, "Home & Kitchen", Draft, date(2024, 3, 3)),
        product(12, "Cookbook: Weeknight Meals", "BK-9915", 32.00, 55, "Books", Published, date(2024, 2, 27)),
    ]
}

fn category(
    id: u64,
    name: &str,
    slug: &str,
    description: Option<&str>,
    parent: Option<&str>,
    product_count: u32,
    status: CategoryStatus,
    created_at: NaiveDate,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.map(String::from),
        parent: parent.map(String::from),
        product_count,
        status,
        created_at,
    }
}

/// The seeded category list.
pub fn categories() -> Vec<Category> {
    use CategoryStatus::*;
    vec![
        category(1, "Electronics", "electronics", Some("Devices and gadgets"), None, 245, Active, date(2024, 1, 15)),
        category(2, "Mobile Phones", "mobile-phones", Some("Smartphones and accessories"), Some("Electronics"), 150, Active, date(2024, 2, 20)),
        category(3, "Fashion", "fashion", Some("Clothing and accessories"), None, 188, Active, date(2024, 1, 15)),
        category(4, "Home & Kitchen", "home-kitchen", Some("Cookware and appliances"), None, 97, Active, date(2024, 1, 30)),
        category(5, "Books", "books", None, None, 61, Active, date(2024, 2, 5)),
        category(6, "Audio", "audio", Some("Headphones and speakers"), Some("Electronics"), 74, Active, date(2024, 3, 12)),
        category(7, "Film Cameras", "film-cameras", Some("Discontinued analog gear"), Some("Electronics"), 5, Archived, date(2023, 8, 1)),
    ]
}

// =============================================================================
// Tests
// =============================================================================
