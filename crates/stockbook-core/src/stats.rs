//! # Dashboard Aggregation
//!
//! Derived, read-only metrics computed from current state on every call.
//!
//! ## No Caching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Store.stats()                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  dashboard_stats(&state.products)  ← recomputed every call          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DashboardStats { totalProducts, totalStock, totalValue, lowStock } │
//! │                                                                     │
//! │  Nothing here is cached or persisted: the numbers always reflect    │
//! │  the live state container at call time.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::money::Money;
use crate::types::{Movement, MovementKind, Product, ProductStatus};

// =============================================================================
// Dashboard Stats
// =============================================================================

/// Aggregate metrics for the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Count of products in the catalog.
    pub total_products: usize,

    /// Sum of all product quantities.
    pub total_stock: i64,

    /// Sum of `quantity × price` across the catalog.
    pub total_value: Money,

    /// Count of active products at or below their reorder level.
    pub low_stock: usize,
}

/// Computes dashboard metrics from the current product collection.
///
/// Inactive products still count toward totals and value; they are only
/// excluded from the low-stock alert count.
pub fn dashboard_stats(products: &[Product]) -> DashboardStats {
    let total_products = products.len();
    let total_stock = products.iter().map(|p| p.quantity).sum();
    let total_value = products
        .iter()
        .fold(Money::zero(), |acc, p| acc + p.stock_value());
    let low_stock = products
        .iter()
        .filter(|p| p.is_low_stock() && p.status != ProductStatus::Inactive)
        .count();

    DashboardStats {
        total_products,
        total_stock,
        total_value,
        low_stock,
    }
}

// =============================================================================
// Daily Movement Totals
// =============================================================================

/// IN/OUT quantity sums for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMovementTotal {
    pub day: NaiveDate,
    pub stock_in: i64,
    pub stock_out: i64,
}

/// Sums IN and OUT quantities per calendar day for the trailing window
/// ending at `today` (inclusive), oldest day first.
///
/// ADJUST movements are corrections, not flow, and are excluded.
/// `today` is passed in by the caller so this stays a pure function.
pub fn daily_movement_totals(
    movements: &[Movement],
    days: u64,
    today: NaiveDate,
) -> Vec<DailyMovementTotal> {
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|day| {
            let mut total = DailyMovementTotal {
                day,
                stock_in: 0,
                stock_out: 0,
            };
            for m in movements.iter().filter(|m| m.date.date_naive() == day) {
                match m.kind {
                    MovementKind::In => total.stock_in += m.quantity,
                    MovementKind::Out => total.stock_out += m.quantity,
                    MovementKind::Adjust => {}
                }
            }
            total
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, price_cents: i64, quantity: i64, reorder_level: i64) -> Product {
        let now = Utc::now();
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            sku: String::new(),
            price_cents,
            quantity,
            category: String::new(),
            reorder_level,
            status: ProductStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_stock, 0);
        assert!(stats.total_value.is_zero());
        assert_eq!(stats.low_stock, 0);
    }

    #[test]
    fn test_stats_totals() {
        let products = vec![
            product("Widget", 1000, 5, 10),  // $10.00 × 5 = $50.00, low
            product("Gadget", 250, 40, 10),  // $2.50 × 40 = $100.00
        ];
        let stats = dashboard_stats(&products);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_stock, 45);
        assert_eq!(stats.total_value.cents(), 15_000);
        assert_eq!(stats.low_stock, 1);
    }

    #[test]
    fn test_low_stock_boundary_is_inclusive() {
        let products = vec![product("Edge", 100, 10, 10)];
        assert_eq!(dashboard_stats(&products).low_stock, 1);
    }

    #[test]
    fn test_low_stock_skips_inactive_products() {
        let mut retired = product("Retired", 100, 0, 10);
        retired.status = ProductStatus::Inactive;
        let products = vec![retired, product("Live", 100, 2, 10)];

        let stats = dashboard_stats(&products);
        assert_eq!(stats.low_stock, 1);
        // Inactive stock still counts toward totals
        assert_eq!(stats.total_stock, 2);
        assert_eq!(stats.total_products, 2);
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn movement(kind: MovementKind, quantity: i64, on: NaiveDate) -> Movement {
        Movement {
            id: format!("m-{on}-{quantity}"),
            product_id: "p-1".to_string(),
            kind,
            quantity,
            reason: String::new(),
            date: on.and_hms_opt(12, 0, 0).unwrap().and_utc(),
            snapshot_qty: 0,
        }
    }

    #[test]
    fn test_daily_totals_window_and_order() {
        let today = day(2026, 8, 7);
        let movements = vec![
            movement(MovementKind::In, 5, day(2026, 8, 7)),
            movement(MovementKind::In, 3, day(2026, 8, 6)),
            movement(MovementKind::Out, 2, day(2026, 8, 6)),
            movement(MovementKind::Adjust, 99, day(2026, 8, 6)), // ignored
            movement(MovementKind::In, 7, day(2026, 7, 1)),      // outside window
        ];

        let totals = daily_movement_totals(&movements, 7, today);
        assert_eq!(totals.len(), 7);
        // Oldest first, today last
        assert_eq!(totals[0].day, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(totals[6].day, today);

        assert_eq!(totals[6].stock_in, 5);
        assert_eq!(totals[5].stock_in, 3);
        assert_eq!(totals[5].stock_out, 2);
        assert_eq!(totals[0].stock_in, 0);
    }
}
