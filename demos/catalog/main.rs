//! Catalog walkthrough against the in-memory backend
//!
//! This example demonstrates:
//! - Building a list view from the default configuration
//! - Categorical, range and text filters
//! - Debounced search-as-you-type
//! - Page navigation and clamping
//! - Persisting filters to disk and restoring them
//!
//! Run with `RUST_LOG=matchmaker=debug cargo run --example catalog` to see
//! the view's own logging.

use matchmaker::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn print_page(title: &str, snapshot: &ViewSnapshot<Product>) {
    println!("{}", title);
    match &snapshot.page {
        Some(page) => {
            for product in &page.items {
                println!(
                    "   - {:<28} {:<14} {:>6.2}",
                    product.name, product.category, product.price
                );
            }
            println!(
                "   page {}/{} ({} products)\n",
                page.page(),
                page.total_pages(),
                page.total_count()
            );
        }
        None => println!("   (nothing loaded)\n"),
    }
    if let Some(notice) = &snapshot.notice {
        println!("   ⚠️  {}: {}\n", notice.code, notice.message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🛒 CPG Matchmaker Catalog Example");
    println!("==================================\n");

    let dir = tempfile::tempdir()?;
    let mut config = MatchmakerConfig::default_config();
    config.storage.filters_dir = Some(dir.path().to_path_buf());
    let Some(catalog) = config.view("catalog") else {
        anyhow::bail!("default configuration has no catalog view");
    };

    // Serve the sample catalog through the same provider interface a backend uses
    let provider = InMemoryDataProvider::new(sample_products());
    let options = provider.filter_options().await?;
    println!("✅ Categories: {}", options.categories.join(", "));
    println!("✅ Brands:     {}", options.brands.join(", "));
    println!(
        "✅ Prices:     {:.2} - {:.2}\n",
        options.price_range.min, options.price_range.max
    );

    let store = config.storage.filter_store();
    let view = ListView::with_store(
        catalog,
        RemoteSource::<Product, _>::new(provider),
        store.clone(),
    );
    view.set_filter_options(options);

    view.apply().await;
    print_page("📋 All products", &view.snapshot());

    view.edit(|f| {
        f.select("category", Selection::value("Beverages"));
        f.set_range("price", 0.0, 5.0);
        f.set_sort("price", SortDirection::Desc);
    });
    view.apply().await;
    print_page("🥤 Beverages under 5.00, priciest first", &view.snapshot());

    for prefix in ["k", "ko", "kom"] {
        view.search(prefix);
    }
    tokio::time::sleep(catalog.debounce() + Duration::from_millis(100)).await;
    print_page("🔎 Searching \"kom\"", &view.snapshot());

    view.reset().await;
    view.go_to_page(42).await;
    print_page("📄 Page 42 (clamped)", &view.snapshot());

    // Filters left behind by a previous session are restored on mount
    view.edit(|f| f.select("brand", Selection::value("Greenway")));
    view.apply().await;
    drop(view);

    let restored = ListView::with_store(
        catalog,
        LocalSource::new(sample_products()),
        store,
    );
    restored.apply().await;
    print_page("💾 Restored from disk", &restored.snapshot());

    Ok(())
}
