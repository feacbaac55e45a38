//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  stockbook-core errors (this file)                                  │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockbook-store errors (separate crate)                            │
//! │  ├── SnapshotError    - Snapshot read/write failures                │
//! │  └── StoreError       - Core | Snapshot, what callers see           │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Caller            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, name, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a message a UI can surface verbatim

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the store's mutation API.
///
/// None of these are fatal: the store remains usable after any rejected
/// call, and a rejected call has not touched state or the snapshot.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A movement referenced a product id that does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A non-empty SKU is already used by another product.
    ///
    /// ## When This Occurs
    /// - Creating a product with an SKU another product already carries
    /// - Editing a product's SKU to one another product already carries
    ///
    /// Empty SKUs never collide; the SKU is an optional business id.
    #[error("A product with SKU '{0}' already exists")]
    DuplicateSku(String),

    /// A category with this name already exists (case-insensitive).
    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    /// A movement carried a negative quantity.
    ///
    /// Callers are expected to reject these before they reach the ledger
    /// engine; the engine still refuses them because an ADJUST to a
    /// negative target has no meaning.
    #[error("Invalid movement quantity: {0}")]
    InvalidQuantity(i64),

    /// An OUT movement would take the product's stock below zero.
    ///
    /// ## When This Occurs
    /// ```text
    /// Record Movement: OUT, qty 5
    ///      │
    ///      ▼
    /// Current stock: 3
    ///      │
    ///      ▼
    /// NegativeStock { name: "Coca-Cola", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Stock for 'Coca-Cola' cannot go negative"
    /// ```
    #[error("Stock for '{name}' cannot go negative: {available} available, {requested} requested")]
    NegativeStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied values don't meet requirements.
/// Used for early validation before business rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., disallowed characters in an SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
