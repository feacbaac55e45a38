//! # The Store
//!
//! Owns the application state, validates and applies every mutation,
//! persists the snapshot, and notifies subscribers.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  collaborator calls store.add_movement(...)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  1. validate against current state  ── Err? ──► nothing happened    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  2. prepare next state on a working copy                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  3. snapshot.save(&next)            ── Err? ──► nothing happened    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  4. swap next into memory                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  5. notify subscribers (exactly once)                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisting BEFORE swapping is what makes every mutation all-or-nothing:
//! a failed write leaves both memory and the previous on-disk snapshot
//! untouched, so a ledger entry and its product update are never visible
//! separately.
//!
//! ## Concurrency
//! Every mutation takes `&mut self`: ownership is the serialization. Two
//! mutations cannot interleave, and collaborators read `state()` as an
//! immutable snapshot until the next notification. Porting this to real
//! concurrent callers means wrapping the store in a mutex or a
//! single-writer actor, not loosening this API.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::bus::{SubscriberId, SubscriberSet};
use crate::error::StoreResult;
use crate::snapshot::{Snapshot, StoreConfig};
use stockbook_core::query::{self, ProductQuery};
use stockbook_core::stats::{self, DailyMovementTotal, DashboardStats};
use stockbook_core::validation;
use stockbook_core::{
    AppState, AuthSession, Category, CoreError, Movement, MovementKind, NewMovement, NewProduct,
    Product, ProductPatch, SettingsPatch, User, DEFAULT_REORDER_LEVEL,
};

// =============================================================================
// Store
// =============================================================================

/// The inventory store.
///
/// Explicitly constructed and owned by the application entry point; pass
/// `&Store` for reads and `&mut Store` for mutations. There is no global
/// instance - tests get fully isolated stores.
pub struct Store {
    state: AppState,
    snapshot: Snapshot,
    subscribers: SubscriberSet,
}

impl Store {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Opens the store: resolves the snapshot location and loads the last
    /// saved state (or the default state on first run / corruption).
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let snapshot = Snapshot::resolve(&config)?;
        Ok(Store::with_snapshot(snapshot))
    }

    /// Opens the store against an explicit snapshot slot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let state = snapshot.load();
        info!(
            path = %snapshot.path().display(),
            products = state.products.len(),
            movements = state.movements.len(),
            "Store opened"
        );
        Store {
            state,
            snapshot,
            subscribers: SubscriberSet::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads & Subscription
    // -------------------------------------------------------------------------

    /// The current state.
    ///
    /// Treat the returned reference as an immutable snapshot until the next
    /// notification; all writes go through the mutation methods.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registers a listener invoked after every successful mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&AppState) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    /// Removes a listener. Returns whether the handle was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Commit Protocol
    // -------------------------------------------------------------------------

    /// Persists the candidate state, swaps it into memory, notifies once.
    ///
    /// Called exactly once per successful mutation. Ordering is the
    /// atomicity guarantee - see the module docs.
    fn commit(&mut self, next: AppState) -> StoreResult<()> {
        self.snapshot.save(&next)?;
        self.state = next;
        self.subscribers.notify(&self.state);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Product Operations
    // -------------------------------------------------------------------------

    /// Creates a product and returns the stored record.
    ///
    /// ## Defaults
    /// `sku: ""`, `category: ""`, `quantity: 0`, `reorder_level: 10`,
    /// `status: Active` - each overridden by an explicit input field.
    ///
    /// ## Errors
    /// - `Validation` - empty name, bad SKU charset, negative price or
    ///   initial quantity
    /// - `DuplicateSku` - non-empty SKU already used by another product
    pub fn add_product(&mut self, input: NewProduct) -> StoreResult<Product> {
        debug!(name = %input.name, "add_product");

        let name = input.name.trim().to_string();
        let sku = input.sku.unwrap_or_default().trim().to_string();

        validation::validate_product_name(&name)?;
        validation::validate_sku(&sku)?;
        validation::validate_price_cents(input.price_cents)?;
        validation::validate_quantity(input.quantity)?;
        if let Some(level) = input.reorder_level {
            validation::validate_reorder_level(level)?;
        }

        if !sku.is_empty() && self.state.products.iter().any(|p| p.sku == sku) {
            return Err(CoreError::DuplicateSku(sku).into());
        }

        let now = Utc::now();
        let product = Product {
            id: new_id(),
            name,
            sku,
            price_cents: input.price_cents,
            quantity: input.quantity,
            category: input.category.unwrap_or_default(),
            reorder_level: input.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL),
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let mut next = self.state.clone();
        next.products.push(product.clone());
        self.commit(next)?;

        info!(id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Shallow-merges `patch` into an existing product.
    ///
    /// Unknown ids are a no-op (no error, no notification). A patch can
    /// never touch `quantity`; stock changes go through [`Store::add_movement`].
    ///
    /// ## Errors
    /// - `DuplicateSku` - the patch's SKU differs from the current one and
    ///   collides with another product; nothing is applied
    /// - `Validation` - empty patched name, negative patched price
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreResult<()> {
        let Some(pos) = self.state.products.iter().position(|p| p.id == id) else {
            debug!(id = %id, "update_product: unknown id, no-op");
            return Ok(());
        };

        if let Some(name) = &patch.name {
            validation::validate_product_name(name)?;
        }
        if let Some(price) = patch.price_cents {
            validation::validate_price_cents(price)?;
        }
        if let Some(level) = patch.reorder_level {
            validation::validate_reorder_level(level)?;
        }
        if let Some(sku) = &patch.sku {
            let sku = sku.trim();
            validation::validate_sku(sku)?;
            if !sku.is_empty() && sku != self.state.products[pos].sku {
                let taken = self
                    .state
                    .products
                    .iter()
                    .any(|p| p.id != id && p.sku == sku);
                if taken {
                    return Err(CoreError::DuplicateSku(sku.to_string()).into());
                }
            }
        }

        let mut next = self.state.clone();
        {
            let product = &mut next.products[pos];
            if let Some(name) = patch.name {
                product.name = name.trim().to_string();
            }
            if let Some(sku) = patch.sku {
                product.sku = sku.trim().to_string();
            }
            if let Some(price) = patch.price_cents {
                product.price_cents = price;
            }
            if let Some(category) = patch.category {
                product.category = category;
            }
            if let Some(level) = patch.reorder_level {
                product.reorder_level = level;
            }
            if let Some(status) = patch.status {
                product.status = status;
            }
            product.updated_at = Utc::now();
        }
        self.commit(next)?;

        debug!(id = %id, "Product updated");
        Ok(())
    }

    /// Hard-deletes a product if present.
    ///
    /// Movements referencing the product are retained: the ledger is the
    /// audit trail and outlives its subject. Consumers must tolerate a
    /// missing product lookup when displaying history.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "delete_product");

        let mut next = self.state.clone();
        next.products.retain(|p| p.id != id);
        self.commit(next)
    }

    // -------------------------------------------------------------------------
    // Category Operations
    // -------------------------------------------------------------------------

    /// Creates a category and returns the stored record.
    ///
    /// ## Errors
    /// - `Validation` - empty name
    /// - `DuplicateName` - a category with this name exists
    ///   (case-insensitive)
    pub fn add_category(&mut self, name: &str) -> StoreResult<Category> {
        debug!(name = %name, "add_category");

        let name = name.trim().to_string();
        validation::validate_category_name(&name)?;

        if self.category_name_taken(&name, None) {
            return Err(CoreError::DuplicateName(name).into());
        }

        let now = Utc::now();
        let category = Category {
            id: new_id(),
            name,
            created_at: now,
            updated_at: now,
        };

        let mut next = self.state.clone();
        next.categories.push(category.clone());
        self.commit(next)?;

        info!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Renames a category. Unknown ids are a no-op.
    ///
    /// ## Errors
    /// - `DuplicateName` - a *different* category already holds the name
    ///   (case-insensitive); changing only the casing of the category's own
    ///   name is allowed
    pub fn update_category(&mut self, id: &str, name: &str) -> StoreResult<()> {
        let name = name.trim().to_string();
        validation::validate_category_name(&name)?;

        if self.category_name_taken(&name, Some(id)) {
            return Err(CoreError::DuplicateName(name).into());
        }

        let Some(pos) = self.state.categories.iter().position(|c| c.id == id) else {
            debug!(id = %id, "update_category: unknown id, no-op");
            return Ok(());
        };

        let mut next = self.state.clone();
        {
            let category = &mut next.categories[pos];
            category.name = name;
            category.updated_at = Utc::now();
        }
        self.commit(next)?;

        debug!(id = %id, "Category renamed");
        Ok(())
    }

    /// Deletes a category if present.
    ///
    /// Products referencing the name keep their (now dangling) label; the
    /// category field is a free-text denormalization, not a foreign key.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "delete_category");

        let mut next = self.state.clone();
        next.categories.retain(|c| c.id != id);
        self.commit(next)
    }

    fn category_name_taken(&self, name: &str, exclude_id: Option<&str>) -> bool {
        let needle = name.to_lowercase();
        self.state
            .categories
            .iter()
            .filter(|c| exclude_id.map_or(true, |id| c.id != id))
            .any(|c| c.name.to_lowercase() == needle)
    }

    // -------------------------------------------------------------------------
    // Movement Operation (the ledger engine)
    // -------------------------------------------------------------------------

    /// Records a stock movement and applies it to the product.
    ///
    /// ## Ledger Arithmetic
    /// ```text
    /// IN     → new = current + quantity
    /// OUT    → new = current - quantity
    /// ADJUST → new = quantity            (absolute set)
    /// ```
    ///
    /// The appended entry freezes `snapshot_qty = new` as the audit value;
    /// the product's quantity and `updated_at` are applied in the same
    /// commit, so ledger and stock can never disagree - even across a
    /// persistence failure.
    ///
    /// ## Errors
    /// - `ProductNotFound` - unknown `product_id`
    /// - `InvalidQuantity` - negative quantity (callers should have
    ///   rejected it already; the engine still refuses)
    /// - `NegativeStock` - an OUT movement overshooting current stock
    pub fn add_movement(&mut self, input: NewMovement) -> StoreResult<Movement> {
        debug!(
            product_id = %input.product_id,
            kind = ?input.kind,
            quantity = input.quantity,
            "add_movement"
        );

        let pos = self
            .state
            .products
            .iter()
            .position(|p| p.id == input.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(input.product_id.clone()))?;

        if input.quantity < 0 {
            return Err(CoreError::InvalidQuantity(input.quantity).into());
        }

        let current = self.state.products[pos].quantity;
        let new_qty = match input.kind {
            MovementKind::In => current + input.quantity,
            MovementKind::Out => current - input.quantity,
            MovementKind::Adjust => input.quantity,
        };

        if new_qty < 0 {
            let product = &self.state.products[pos];
            return Err(CoreError::NegativeStock {
                name: product.name.clone(),
                available: current,
                requested: input.quantity,
            }
            .into());
        }

        let now = Utc::now();
        let movement = Movement {
            id: new_id(),
            product_id: input.product_id,
            kind: input.kind,
            quantity: input.quantity,
            reason: input.reason,
            date: now,
            snapshot_qty: new_qty,
        };

        let mut next = self.state.clone();
        next.movements.push(movement.clone());
        {
            // The one sanctioned quantity write outside product creation
            let product = &mut next.products[pos];
            product.quantity = new_qty;
            product.updated_at = now;
        }
        self.commit(next)?;

        info!(
            id = %movement.id,
            product_id = %movement.product_id,
            snapshot_qty = movement.snapshot_qty,
            "Movement recorded"
        );
        Ok(movement)
    }

    // -------------------------------------------------------------------------
    // Settings, Theme, Auth
    // -------------------------------------------------------------------------

    /// Shallow-merges `patch` into the settings record.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> StoreResult<()> {
        let mut next = self.state.clone();
        if let Some(company_name) = patch.company_name {
            next.settings.company_name = company_name;
        }
        if let Some(currency) = patch.currency {
            next.settings.currency = currency;
        }
        self.commit(next)?;

        debug!("Settings updated");
        Ok(())
    }

    /// Flips between light and dark theme.
    pub fn toggle_theme(&mut self) -> StoreResult<()> {
        let mut next = self.state.clone();
        next.theme = next.theme.toggled();
        self.commit(next)?;

        debug!(theme = ?self.state.theme, "Theme toggled");
        Ok(())
    }

    /// Signs in. Demo-grade policy: any non-empty email and password pair
    /// succeeds; the display name is derived from the email's local part.
    ///
    /// Empty credentials fail with a validation error and mutate nothing.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<User> {
        let email = email.trim();
        validation::validate_credentials(email, password)?;

        let user = User {
            email: email.to_string(),
            name: display_name_from_email(email),
        };

        let mut next = self.state.clone();
        next.auth = AuthSession::signed_in(user.clone());
        self.commit(next)?;

        info!(email = %user.email, "Signed in");
        Ok(user)
    }

    /// Clears the session.
    pub fn logout(&mut self) -> StoreResult<()> {
        let mut next = self.state.clone();
        next.auth = AuthSession::signed_out();
        self.commit(next)?;

        info!("Signed out");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Query API (derived, never cached)
    // -------------------------------------------------------------------------

    /// Dashboard metrics, recomputed from live state on every call.
    pub fn stats(&self) -> DashboardStats {
        stats::dashboard_stats(&self.state.products)
    }

    /// Product listing for the given filter/sort criteria.
    pub fn products_matching(&self, query: &ProductQuery) -> Vec<&Product> {
        query::filter_products(&self.state.products, query)
    }

    /// Movement history, newest first, optionally for one product.
    pub fn movement_history(&self, product_id: Option<&str>) -> Vec<&Movement> {
        query::movement_history(&self.state.movements, product_id)
    }

    /// The most recent movements across all products.
    pub fn recent_movements(&self, limit: usize) -> Vec<&Movement> {
        query::recent_movements(&self.state.movements, limit)
    }

    /// The most recently created products.
    pub fn recent_products(&self, limit: usize) -> Vec<&Product> {
        query::recent_products(&self.state.products, limit)
    }

    /// Per-day IN/OUT totals for the trailing window ending today.
    pub fn daily_movement_totals(&self, days: u64) -> Vec<DailyMovementTotal> {
        stats::daily_movement_totals(&self.state.movements, days, Utc::now().date_naive())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Generates a fresh entity id.
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Derives a display name from an email's local part:
/// `jane.doe@example.com` → `Jane Doe`.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        local.to_string()
    } else {
        words.join(" ")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
