//! # Read Helpers
//!
//! Pure, allocation-light queries over the state's collections. These back
//! the list views: product search/filter/sort, the movement history table,
//! and the dashboard's recent-activity panels.
//!
//! All functions borrow from the caller's state and return borrowed rows;
//! nothing here mutates or caches.

use crate::types::{Movement, Product};

// =============================================================================
// Product Queries
// =============================================================================

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Alphabetical by name.
    Name,
    /// Ascending stock level (emptiest shelves first).
    Stock,
}

impl Default for ProductSort {
    fn default() -> Self {
        ProductSort::Name
    }
}

/// Filter and sort criteria for product listings.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring match against name and SKU.
    /// Empty matches everything.
    pub search: String,

    /// Keep only products at or below their reorder level.
    pub low_stock_only: bool,

    pub sort: ProductSort,
}

/// Applies a [`ProductQuery`] to the product collection.
pub fn filter_products<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<&Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.sku.to_lowercase().contains(&needle)
        })
        .filter(|p| !query.low_stock_only || p.is_low_stock())
        .collect();

    match query.sort {
        ProductSort::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        ProductSort::Stock => rows.sort_by_key(|p| p.quantity),
    }

    rows
}

/// The most recently created products, newest first.
pub fn recent_products(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut rows: Vec<&Product> = products.iter().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.truncate(limit);
    rows
}

// =============================================================================
// Movement Queries
// =============================================================================

/// The movement history view: newest first, optionally restricted to one
/// product.
///
/// Entries whose `product_id` no longer resolves are still returned; the
/// ledger outlives hard-deleted products.
pub fn movement_history<'a>(
    movements: &'a [Movement],
    product_id: Option<&str>,
) -> Vec<&'a Movement> {
    // The ledger is append-only, so walking it back to front already
    // yields newest-first; the stable sort then only reorders entries
    // whose recorded dates actually differ.
    let mut rows: Vec<&Movement> = movements
        .iter()
        .rev()
        .filter(|m| product_id.map_or(true, |id| m.product_id == id))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// The most recent movements across all products, newest first.
pub fn recent_movements(movements: &[Movement], limit: usize) -> Vec<&Movement> {
    let mut rows = movement_history(movements, None);
    rows.truncate(limit);
    rows
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MovementKind, ProductStatus};
    use chrono::{Duration, Utc};

    fn product(name: &str, sku: &str, quantity: i64, minutes_ago: i64) -> Product {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            sku: sku.to_string(),
            price_cents: 100,
            quantity,
            category: String::new(),
            reorder_level: 10,
            status: ProductStatus::Active,
            created_at: at,
            updated_at: at,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Widget", "WID-1", 50, 30),
            product("Gadget", "GAD-1", 3, 20),
            product("Doohickey", "WID-2", 8, 10),
        ]
    }

    #[test]
    fn test_search_matches_name_and_sku_case_insensitively() {
        let products = catalog();

        let by_name = filter_products(
            &products,
            &ProductQuery {
                search: "gadg".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Gadget");

        let by_sku = filter_products(
            &products,
            &ProductQuery {
                search: "wid".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(by_sku.len(), 2);
    }

    #[test]
    fn test_low_stock_filter_and_stock_sort() {
        let products = catalog();
        let rows = filter_products(
            &products,
            &ProductQuery {
                low_stock_only: true,
                sort: ProductSort::Stock,
                ..ProductQuery::default()
            },
        );
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget", "Doohickey"]);
    }

    #[test]
    fn test_default_sort_is_by_name() {
        let products = catalog();
        let rows = filter_products(&products, &ProductQuery::default());
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Doohickey", "Gadget", "Widget"]);
    }

    #[test]
    fn test_recent_products_newest_first() {
        let products = catalog();
        let rows = recent_products(&products, 2);
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        // Doohickey is newest (10 minutes ago), then Gadget
        assert_eq!(names, vec!["Doohickey", "Gadget"]);
    }

    fn movement(product_id: &str, minutes_ago: i64) -> Movement {
        Movement {
            id: format!("m-{product_id}-{minutes_ago}"),
            product_id: product_id.to_string(),
            kind: MovementKind::In,
            quantity: 1,
            reason: String::new(),
            date: Utc::now() - Duration::minutes(minutes_ago),
            snapshot_qty: 1,
        }
    }

    #[test]
    fn test_movement_history_orders_and_filters() {
        let movements = vec![
            movement("p-1", 30),
            movement("p-2", 20),
            movement("p-1", 10),
        ];

        let all = movement_history(&movements, None);
        assert_eq!(all.len(), 3);
        assert!(all[0].date >= all[1].date && all[1].date >= all[2].date);

        let one = movement_history(&movements, Some("p-1"));
        assert_eq!(one.len(), 2);
        assert!(one.iter().all(|m| m.product_id == "p-1"));

        // Dangling product ids are not special-cased
        let gone = movement_history(&movements, Some("deleted"));
        assert!(gone.is_empty());
    }

    #[test]
    fn test_recent_movements_limit() {
        let movements = vec![
            movement("p-1", 30),
            movement("p-2", 20),
            movement("p-1", 10),
        ];
        let recent = recent_movements(&movements, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].product_id, "p-1");
        assert_eq!(recent[1].product_id, "p-2");
    }
}
