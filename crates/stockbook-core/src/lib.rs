//! # stockbook-core: Pure Domain Logic for Stockbook
//!
//! This crate is the **heart** of the Stockbook inventory data layer. It
//! contains the data model and all domain rules as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │            UI Collaborators (outside this workspace)        │   │
//! │  │   Product list ─ History table ─ Dashboard ─ Settings form  │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ read / mutate / subscribe           │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                 stockbook-store (the Store)                 │   │
//! │  │        snapshot file • state container • subscribers        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ stockbook-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌───────┐ ┌───────────┐ ┌───────┐ ┌────────┐  │   │
//! │  │  │  types  │ │ money │ │validation │ │ stats │ │ query  │  │   │
//! │  │  │AppState │ │ Money │ │   rules   │ │ cards │ │ views  │  │   │
//! │  │  └─────────┘ └───────┘ └───────────┘ └───────┘ └────────┘  │   │
//! │  │                                                             │   │
//! │  │        NO I/O • NO SNAPSHOT FILE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Movement, AppState, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`stats`] - Dashboard aggregation, computed on demand
//! - [`query`] - Read helpers for list views

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod query;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stats::{dashboard_stats, DashboardStats};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default reorder level assigned to products created without one.
///
/// A product at or below its reorder level counts as low stock on the
/// dashboard.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// Maximum length for product and category names.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for an SKU.
pub const MAX_SKU_LEN: usize = 50;
