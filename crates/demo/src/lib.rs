//! Demonstration wiring: factory -> singleton catalog -> filter strategies.

use std::io::Write;

use anyhow::Context;
use forgecatalog_products::{CategoryFilter, PriceFilter, Product, ProductCatalog, ProductFactory};

/// Products added by the demonstration, as `(category, name, price)`.
pub const DEMO_PRODUCTS: [(&str, &str, f64); 4] = [
    ("Electronics", "Laptop", 1200.0),
    ("Clothing", "T-Shirt", 25.0),
    ("Food", "Pizza", 15.0),
    ("Electronics", "Smartphone", 800.0),
];

/// Populate the process-wide catalog and write the three listings to `out`.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = ProductCatalog::get_instance();

    for (category, name, price) in DEMO_PRODUCTS {
        catalog.add(ProductFactory::create(category, name, price));
    }
    tracing::info!(products = catalog.len(), "catalog populated");

    write_section(out, "📦 All products:", &catalog.all())?;
    let by_category = CategoryFilter::new("Electronics");
    write_section(
        out,
        &format!("📂 Filter by category '{}':", by_category.category()),
        &catalog.filter(&by_category),
    )?;

    let by_price = PriceFilter::new(20.0, 1000.0);
    write_section(
        out,
        &format!(
            "💰 Filter by price between ${} and ${}:",
            by_price.min(),
            by_price.max()
        ),
        &catalog.filter(&by_price),
    )?;

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn write_section(out: &mut impl Write, title: &str, products: &[Product]) -> anyhow::Result<()> {
    writeln!(out, "\n{title}").context("failed to write section title")?;
    for product in products {
        writeln!(out, "{product}").context("failed to write product line")?;
    }
    Ok(())
}
