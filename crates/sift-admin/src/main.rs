//! sift admin CLI - main entry point.
//!
//! Drives the list query engine over the seeded catalog: one subcommand
//! per view, flags for search, filters, sort, pagination, and selection.

mod catalog;
mod config;
mod domain;
mod render;
mod stats;

use clap::{Args, Parser, Subcommand, ValueEnum};
use config::AdminConfig;
use domain::{Category, CategoryStatus, Product, ProductStatus};
use sift_core::{Filter, RecordId, SortSpec, ViewConfig};
use sift_engine::ListView;
use stats::CatalogSummary;
use std::error::Error;

// =============================================================================
// CLI definition
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "Admin catalog browser built on the sift query engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the product catalog.
    Products(ProductArgs),
    /// Browse the category list.
    Categories(CategoryArgs),
    /// Show dashboard metrics.
    Dashboard,
}

/// Flags shared by every list view.
#[derive(Debug, Args)]
struct ListArgs {
    /// Search text matched against the view's searchable fields.
    #[arg(long)]
    search: Option<String>,

    /// Sort column, e.g. "price" or "price:desc".
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortSpec>,

    /// Page to show (1-based).
    #[arg(long)]
    page: Option<usize>,

    /// Records per page.
    #[arg(long)]
    page_size: Option<usize>,

    /// Toggle selection of a record id. Repeatable.
    #[arg(long = "select", value_name = "ID")]
    select: Vec<u64>,

    /// Select every record on the visible page.
    #[arg(long)]
    select_all: bool,

    /// Emit the page as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ProductArgs {
    #[command(flatten)]
    list: ListArgs,

    /// Filter by category name.
    #[arg(long)]
    category: Option<String>,

    /// Filter by publication status.
    #[arg(long)]
    status: Option<ProductStatus>,

    /// Bulk action applied to the selection.
    #[arg(long)]
    bulk: Option<ProductBulkAction>,
}

#[derive(Debug, Args)]
struct CategoryArgs {
    #[command(flatten)]
    list: ListArgs,

    /// Filter by status.
    #[arg(long)]
    status: Option<CategoryStatus>,

    /// Bulk action applied to the selection.
    #[arg(long)]
    bulk: Option<CategoryBulkAction>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProductBulkAction {
    Delete,
    Publish,
    Archive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryBulkAction {
    Delete,
    Archive,
    Activate,
}

/// Parse "key" or "key:asc" / "key:desc" into a sort spec.
fn parse_sort(value: &str) -> Result<SortSpec, String> {
    let (key, direction) = value.split_once(':').unwrap_or((value, "asc"));
    if key.is_empty() {
        return Err("sort key is empty".to_string());
    }
    match direction {
        "asc" => Ok(SortSpec::ascending(key)),
        "desc" => Ok(SortSpec::descending(key)),
        other => Err(format!("unknown sort direction '{other}' (use asc or desc)")),
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Build a view from config defaults plus CLI overrides.
fn resolve_view(config: &ViewConfig, list: &ListArgs) -> ListView {
    let sort = list.sort.clone().unwrap_or_else(|| config.sort_spec());
    let mut view = ListView::new(sort, list.page_size.unwrap_or(config.page_size));
    if let Some(page) = list.page {
        view.go_to_page(page);
    }
    if let Some(search) = &list.search {
        view.set_search(search.clone());
    }
    view
}

fn run_products(args: ProductArgs, config: &ViewConfig) -> Result<(), Box<dyn Error>> {
    let records = catalog::products();
    let mut view = resolve_view(config, &args.list);
    view.set_filter("category", args.category.map_or(Filter::All, Filter::equals));
    view.set_filter(
        "status",
        args.status.map_or(Filter::All, |s| Filter::equals(s.as_str())),
    );

    let page = view.refresh(&records)?;
    if args.list.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    for id in &args.list.select {
        view.toggle(RecordId(*id));
    }
    if args.list.select_all {
        view.toggle_select_all_visible(&page);
    }

    println!(
        "{}",
        render::table(
            &render::PRODUCT_HEADERS,
            &render::product_rows(&page, view.selection())
        )
    );
    println!("{}", render::footer(&page, view.query().page));
    if let Some(summary) = render::selection_summary(view.selection()) {
        println!("{summary}");
    }

    if let Some(action) = args.bulk {
        let ids = view.take_selected();
        run_product_bulk(action, &ids, &records);
    }
    Ok(())
}

fn run_product_bulk(action: ProductBulkAction, ids: &[RecordId], records: &[Product]) {
    if ids.is_empty() {
        println!("\nNothing selected.");
        return;
    }
    let verb = match action {
        ProductBulkAction::Delete => "Deleting",
        ProductBulkAction::Publish => "Publishing",
        ProductBulkAction::Archive => "Archiving",
    };
    let noun = if ids.len() == 1 { "product" } else { "products" };
    println!("\n{verb} {} {noun}:", ids.len());
    for id in ids {
        if let Some(product) = records.iter().find(|p| p.id == id.0) {
            println!("  {} ({})", product.name, product.sku);
        } else {
            tracing::warn!(id = id.0, "selected id not in catalog");
        }
    }
}

fn run_categories(args: CategoryArgs, config: &ViewConfig) -> Result<(), Box<dyn Error>> {
    let records = catalog::categories();
    let mut view = resolve_view(config, &args.list);
    view.set_filter(
        "status",
        args.status.map_or(Filter::All, |s| Filter::equals(s.as_str())),
    );

    let page = view.refresh(&records)?;
    if args.list.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    for id in &args.list.select {
        view.toggle(RecordId(*id));
    }
    if args.list.select_all {
        view.toggle_select_all_visible(&page);
    }

    println!(
        "{}",
        render::table(
            &render::CATEGORY_HEADERS,
            &render::category_rows(&page, view.selection())
        )
    );
    println!("{}", render::footer(&page, view.query().page));
    if let Some(summary) = render::selection_summary(view.selection()) {
        println!("{summary}");
    }

    if let Some(action) = args.bulk {
        let ids = view.take_selected();
        run_category_bulk(action, &ids, &records);
    }
    Ok(())
}

fn run_category_bulk(action: CategoryBulkAction, ids: &[RecordId], records: &[Category]) {
    if ids.is_empty() {
        println!("\nNothing selected.");
        return;
    }
    let verb = match action {
        CategoryBulkAction::Delete => "Deleting",
        CategoryBulkAction::Archive => "Archiving",
        CategoryBulkAction::Activate => "Activating",
    };
    let noun = if ids.len() == 1 { "category" } else { "categories" };
    println!("\n{verb} {} {noun}:", ids.len());
    for id in ids {
        if let Some(category) = records.iter().find(|c| c.id == id.0) {
            println!("  {} (/{})", category.name, category.slug);
        } else {
            tracing::warn!(id = id.0, "selected id not in catalog");
        }
    }
}

fn run_dashboard() {
    let products = catalog::products();
    let summary = CatalogSummary::from_products(&products);

    println!("Catalog");
    println!("  Products:        {} ({} published, {} draft, {} archived)",
        summary.total_products, summary.published, summary.draft, summary.archived);
    println!("  Out of stock:    {}", summary.out_of_stock);
    println!("  Inventory value: ${:.2}", summary.inventory_value);

    let sales: Vec<Vec<String>> = stats::sales_series()
        .iter()
        .map(|m| {
            vec![
                m.month.to_string(),
                m.total.to_string(),
                m.online.to_string(),
                m.offline.to_string(),
            ]
        })
        .collect();
    println!("\n{}", render::table(&["Month", "Total", "Online", "Offline"], &sales));

    let orders: Vec<Vec<String>> = stats::order_status_breakdown()
        .iter()
        .map(|o| vec![o.status.to_string(), o.count.to_string()])
        .collect();
    println!("{}", render::table(&["Orders", "Count"], &orders));

    let by_category: Vec<Vec<String>> = stats::inventory_by_category(&products)
        .iter()
        .map(|(name, value)| vec![name.clone(), format!("${value:.2}")])
        .collect();
    println!("{}", render::table(&["Category", "Inventory value"], &by_category));
}

// =============================================================================
// Entry Point
// =============================================================================

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AdminConfig::load()?;
    match cli.command {
        Command::Products(args) => run_products(args, &config.products),
        Command::Categories(args) => run_categories(args, &config.categories),
        Command::Dashboard => {
            run_dashboard();
            Ok(())
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================
