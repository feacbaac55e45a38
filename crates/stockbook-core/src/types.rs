//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    Category    │   │    Movement    │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  id (UUID)     │      │
//! │  │  sku (business)│   │  name (unique, │   │  product_id    │      │
//! │  │  name          │   │   case-insens) │   │  kind IN/OUT/  │      │
//! │  │  price_cents   │   │                │   │       ADJUST   │      │
//! │  │  quantity      │   │                │   │  snapshot_qty  │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  AppState = products + categories + movements                       │
//! │           + settings + theme + auth                                 │
//! │  (the whole value is what the snapshot file persists)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has an `id`: UUID v4 string, immutable, assigned at creation.
//! Products additionally carry an optional human-readable `sku` (unique when
//! non-empty). A product's `category` is a free-text label, not a foreign
//! key: deleting a category leaves the label dangling on purpose.
//!
//! ## Wire Format
//! All persisted types rename to camelCase so the snapshot document keeps
//! the original `inventory_app_v1` field names (`reorderLevel`,
//! `snapshotQty`, `isAuthenticated`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::DEFAULT_REORDER_LEVEL;

// =============================================================================
// Product
// =============================================================================

/// Whether a product participates in day-to-day operation.
///
/// Inactive products keep their history but are excluded from low-stock
/// alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Required, non-empty.
    pub name: String,

    /// Stock Keeping Unit - optional business identifier.
    /// Empty string means "no SKU"; non-empty SKUs are unique.
    #[serde(default)]
    pub sku: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Current stock level. Never negative.
    ///
    /// Once the product exists, this field is mutated only by the movement
    /// ledger; product edits cannot touch it.
    pub quantity: i64,

    /// Free-text category label. Empty means uncategorized.
    /// Not a foreign key - no referential integrity is enforced.
    #[serde(default)]
    pub category: String,

    /// Stock level at or below which the product counts as low stock.
    #[serde(default = "default_reorder_level")]
    pub reorder_level: i64,

    /// Active / Inactive.
    #[serde(default)]
    pub status: ProductStatus,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (edits and movements both refresh).
    pub updated_at: DateTime<Utc>,
}

fn default_reorder_level() -> i64 {
    DEFAULT_REORDER_LEVEL
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Value of the stock on hand (`quantity × price`).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Whether stock is at or below the reorder level.
    ///
    /// Status is deliberately not considered here; the dashboard combines
    /// this with [`ProductStatus`] when counting alerts.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named grouping for products.
///
/// Names are unique under case-insensitive comparison. Products reference
/// categories by name, by value; deleting a category does not rewrite them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, unique case-insensitively.
    pub name: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Movement
// =============================================================================

/// How a movement's quantity applies to the product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    /// Stock received: `new = current + quantity`.
    In,
    /// Stock removed: `new = current - quantity`.
    Out,
    /// Absolute correction: `new = quantity`, ignoring the current value.
    Adjust,
}

/// An immutable ledger entry recording one stock change.
///
/// Movements are append-only: the core never updates or deletes them.
/// Together they form the durable audit trail; `snapshot_qty` freezes the
/// resulting stock level so history stays auditable even if the product is
/// later deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The product this entry applied to. May dangle after a hard product
    /// delete; consumers must tolerate a missing lookup.
    pub product_id: String,

    /// IN / OUT / ADJUST.
    #[serde(rename = "type")]
    pub kind: MovementKind,

    /// Quantity as recorded. Non-negative; semantics depend on `kind`.
    pub quantity: i64,

    /// Free-text reason ("Purchase Order", "Damaged", ...).
    pub reason: String,

    /// When the movement was recorded. Immutable.
    pub date: DateTime<Utc>,

    /// The product's stock immediately after this movement applied.
    /// Written once at recording time, never recomputed.
    pub snapshot_qty: i64,
}

// =============================================================================
// Settings
// =============================================================================

/// Company-wide settings. A single mutable record, replaced by shallow merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub company_name: String,

    /// Currency code (ISO 4217), display-only.
    pub currency: String,
}

impl Default for Settings {
    /// The documented default state: `USD` / `My Inventory`.
    fn default() -> Self {
        Settings {
            company_name: "My Inventory".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl Settings {
    /// Formats a cent amount using the configured currency.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::types::Settings;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.format_cents(1234), "$12.34");
    /// ```
    ///
    /// Codes without a well-known symbol fall back to `"CODE 12.34"`.
    pub fn format_cents(&self, cents: i64) -> String {
        let amount = Money::from_cents(cents);
        let sign = if amount.is_negative() { "-" } else { "" };
        let symbol = match self.currency.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            _ => "",
        };

        if symbol.is_empty() {
            format!(
                "{} {}{}.{:02}",
                self.currency,
                sign,
                amount.major().abs(),
                amount.minor()
            )
        } else {
            format!("{}{}{}.{:02}", sign, symbol, amount.major().abs(), amount.minor())
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// UI color scheme. Part of global state so it survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    /// Returns the other theme.
    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// =============================================================================
// Auth Session
// =============================================================================

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,

    /// Display name, derived from the email at login.
    pub name: String,
}

/// Process-wide auth session. Persisted as part of the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl AuthSession {
    /// A session for the given user.
    pub fn signed_in(user: User) -> Self {
        AuthSession {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// The signed-out session (also the default).
    pub fn signed_out() -> Self {
        AuthSession::default()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// The complete application state.
///
/// Exclusively owned by the store; collaborators read it between mutations
/// and must treat it as an immutable snapshot until the next notification.
/// This whole value is what the persistence adapter serializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub categories: Vec<Category>,

    /// Append-only ledger, in recording order.
    #[serde(default)]
    pub movements: Vec<Movement>,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub auth: AuthSession,
}

// =============================================================================
// Input DTOs
// =============================================================================

/// Input for creating a product.
///
/// Only `name` is required; everything else falls back to the documented
/// defaults (`sku: ""`, `reorder_level: 10`, `status: Active`, quantity 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub sku: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
    /// Initial stock. Later changes must go through the movement ledger.
    #[serde(default)]
    pub quantity: i64,
    pub category: Option<String>,
    pub reorder_level: Option<i64>,
    pub status: Option<ProductStatus>,
}

/// Shallow-merge patch for editing a product.
///
/// There is intentionally no `quantity` field: stock is mutated only by the
/// movement ledger, and leaving the field out makes that rule structural
/// rather than a runtime check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub reorder_level: Option<i64>,
    pub status: Option<ProductStatus>,
}

/// Input for recording a stock movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub product_id: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// Non-negative; for ADJUST this is the new absolute stock level.
    pub quantity: i64,
    #[serde(default)]
    pub reason: String,
}

/// Shallow-merge patch for the settings record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub company_name: Option<String>,
    pub currency: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
