//! Plain-text rendering of list pages.

use crate::domain::{Category, Product};
use sift_core::SelectionSet;
use sift_engine::PageResult;

/// Pad-and-align a header row plus data rows into a text table.
///
/// Column widths follow the widest cell; columns are separated by two
/// spaces with a dash rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    render_row(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in rows {
        render_row(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn render_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn checkbox(selection: &SelectionSet, id: sift_core::RecordId) -> String {
    if selection.contains(id) { "[x]" } else { "[ ]" }.to_string()
}

/// Table rows for a page of products.
pub fn product_rows(page: &PageResult<Product>, selection: &SelectionSet) -> Vec<Vec<String>> {
    page.visible
        .iter()
        .map(|p| {
            vec![
                checkbox(selection, sift_core::RecordId(p.id)),
                p.id.to_string(),
                p.name.clone(),
                p.sku.clone(),
                format!("${:.2}", p.price),
                format!("{} ({} units)", p.stock_level().label(), p.stock),
                p.category.clone(),
                p.status.to_string(),
                p.created_at.to_string(),
            ]
        })
        .collect()
}

pub const PRODUCT_HEADERS: [&str; 9] = [
    "", "ID", "Product", "SKU", "Price", "Stock", "Category", "Status", "Added",
];

/// Table rows for a page of categories.
pub fn category_rows(page: &PageResult<Category>, selection: &SelectionSet) -> Vec<Vec<String>> {
    page.visible
        .iter()
        .map(|c| {
            vec![
                checkbox(selection, sift_core::RecordId(c.id)),
                c.id.to_string(),
                c.name.clone(),
                format!("/{}", c.slug),
                c.description.clone().unwrap_or_else(|| "-".to_string()),
                c.parent.clone().unwrap_or_else(|| "-".to_string()),
                format!("{} products", c.product_count),
                c.status.to_string(),
            ]
        })
        .collect()
}

pub const CATEGORY_HEADERS: [&str; 8] = [
    "", "ID", "Category", "Slug", "Description", "Parent", "Products", "Status",
];

/// The "Showing X to Y of Z results" pagination footer.
///
/// Directions that can be navigated are rendered as the `--page` flag
/// that reaches them; a missing hint means that button is disabled.
pub fn footer<R>(result: &PageResult<R>, page: usize) -> String {
    let mut line = match result.display_range() {
        Some((from, to)) => format!("Showing {from} to {to} of {} results", result.total),
        None => "No results".to_string(),
    };
    let mut nav = Vec::new();
    if result.has_prev(page) {
        nav.push(format!("previous: --page {}", page - 1));
    }
    if result.has_next() {
        nav.push(format!("next: --page {}", page + 1));
    }
    if !nav.is_empty() {
        line.push_str("  (");
        line.push_str(&nav.join(", "));
        line.push(')');
    }
    line
}

/// The "N selected" bulk-action bar, shown only when something is selected.
pub fn selection_summary(selection: &SelectionSet) -> Option<String> {
    if selection.is_empty() {
        None
    } else {
        Some(format!("{} selected", selection.len()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let rendered = table(
            &["Name", "Qty"],
            &[
                vec!["Alpha".to_string(), "1".to_string()],
                vec!["A much longer name".to_string(), "25".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("------"));
        assert!(lines[2].starts_with("Alpha "));
    }

    #[test]
    fn test_footer_for_empty_result() {
        let result: PageResult<Product> = PageResult {
            visible: vec![],
            total: 0,
            first_index: 0,
            last_index: 0,
        };
        assert_eq!(footer(&result, 1), "No results");
    }

    #[test]
    fn test_footer_nav_hints_on_middle_page() {
        let result: PageResult<u32> = PageResult {
            visible: vec![0; 10],
            total: 45,
            first_index: 10,
            last_index: 20,
        };
        assert_eq!(
            footer(&result, 2),
            "Showing 11 to 20 of 45 results  (previous: --page 1, next: --page 3)"
        );
    }

    #[test]
    fn test_footer_hides_hints_on_single_page() {
        let result: PageResult<u32> = PageResult {
            visible: vec![0; 3],
            total: 3,
            first_index: 0,
            last_index: 3,
        };
        assert_eq!(footer(&result, 1), "Showing 1 to 3 of 3 results");
    }

    #[test]
    fn test_selection_summary_hidden_when_empty() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection_summary(&selection), None);
        selection.insert(sift_core::RecordId(4));
        assert_eq!(selection_summary(&selection), Some("1 selected".to_string()));
    }
}
