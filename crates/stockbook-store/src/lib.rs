//! # stockbook-store: Snapshot Persistence + the Store
//!
//! This crate provides the stateful half of Stockbook: the snapshot file,
//! the exclusively-owned state container, the mutation API, and the
//! subscriber bus.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Stockbook Data Flow                           │
//! │                                                                     │
//! │  Collaborator (list view, dashboard, settings form)                 │
//! │       │ mutate                     ▲ state() / stats() / notify     │
//! │       ▼                            │                                │
//! │  ┌─────────────────────────────────┴───────────────────────────┐   │
//! │  │                 stockbook-store (THIS CRATE)                │   │
//! │  │                                                             │   │
//! │  │   ┌────────────┐    ┌──────────────┐    ┌──────────────┐   │   │
//! │  │   │   store    │    │   snapshot   │    │     bus      │   │   │
//! │  │   │ (store.rs) │───►│(snapshot.rs) │    │   (bus.rs)   │   │   │
//! │  │   │            │    │              │    │              │   │   │
//! │  │   │ mutations  │    │ load / save  │    │ subscribers  │   │   │
//! │  │   │ + queries  │───────────────────────►│ notify once  │   │   │
//! │  │   └────────────┘    └──────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │                                ▼                                    │
//! │            one JSON snapshot file, replaced atomically              │
//! │        e.g. ~/.local/share/stockbook/inventory_app_v1.json          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`snapshot`] - persistence adapter: load, atomic save, path resolution
//! - [`bus`] - typed observer list with explicit unsubscribe handles
//! - [`store`] - the Store: validate → mutate → persist → notify
//! - [`error`] - snapshot and store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockbook_store::{Store, StoreConfig};
//! use stockbook_core::NewProduct;
//!
//! # fn main() -> Result<(), stockbook_store::StoreError> {
//! let mut store = Store::open(StoreConfig::default())?;
//!
//! store.subscribe(|state| println!("{} products", state.products.len()));
//!
//! store.add_product(NewProduct {
//!     name: "Widget".to_string(),
//!     price_cents: 1000,
//!     ..NewProduct::default()
//! })?;
//!
//! println!("inventory value: {}", store.stats().total_value);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bus;
pub mod error;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use bus::SubscriberId;
pub use error::{SnapshotError, StoreError, StoreResult};
pub use snapshot::{Snapshot, StoreConfig};
pub use store::Store;
