//! Minimal end-to-end tour of the store: open, subscribe, mutate, query.
//!
//! Run with:
//! ```text
//! RUST_LOG=debug cargo run -p stockbook-store --example quickstart
//! ```

use stockbook_core::{MovementKind, NewMovement, NewProduct};
use stockbook_store::{Snapshot, Store, StoreError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: INFO, override with RUST_LOG (e.g. RUST_LOG=stockbook=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Keep the demo out of the real data directory
    let dir = tempfile::TempDir::new()?;
    let mut store = Store::with_snapshot(Snapshot::at(dir.path().join("quickstart.json")));

    let handle = store.subscribe(|state| {
        println!(
            "  -> notified: {} products, {} ledger entries",
            state.products.len(),
            state.movements.len()
        );
    });

    let widget = store.add_product(NewProduct {
        name: "Widget".to_string(),
        sku: Some("WID-1".to_string()),
        price_cents: 1000,
        ..NewProduct::default()
    })?;

    store.add_movement(NewMovement {
        product_id: widget.id.clone(),
        kind: MovementKind::In,
        quantity: 5,
        reason: "Purchase Order".to_string(),
    })?;

    // Duplicate SKUs are refused and leave the catalog untouched
    match store.add_product(NewProduct {
        name: "Impostor".to_string(),
        sku: Some("WID-1".to_string()),
        ..NewProduct::default()
    }) {
        Err(StoreError::Core(err)) => println!("rejected as expected: {err}"),
        other => panic!("expected a duplicate-SKU rejection, got {other:?}"),
    }

    let stats = store.stats();
    println!(
        "{}: {} products, {} in stock, value {}",
        store.state().settings.company_name,
        stats.total_products,
        stats.total_stock,
        store.state().settings.format_cents(stats.total_value.cents()),
    );

    store.unsubscribe(handle);
    Ok(())
}
