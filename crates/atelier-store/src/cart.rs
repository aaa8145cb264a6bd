//! # Cart Store
//!
//! The authoritative shopping cart, persisted under the cart key.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            State Change            Persist   Notification    │
//! │  ─────────            ────────────            ───────   ────────────    │
//! │                                                                         │
//! │  add_to_cart(new)     items.push(line)        yes       Added to cart   │
//! │  add_to_cart(dup)     (none)                  no        Already in cart │
//! │  remove_from_cart     items.retain(id != x)   yes       Removed         │
//! │  clear_cart           items.clear()           yes       (none)          │
//! │                                                                         │
//! │  cart_total / cart_count / is_in_cart / items: read only               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write-Through
//! Every mutation builds the next item list, writes it to the backend, and
//! only then replaces the in-memory list. If the write fails the cart is
//! unchanged and no notification is sent.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use atelier_core::validation::{validate_artwork, validate_quantity};
use atelier_core::{Artwork, CartLineItem, Money};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::notify::{Notification, Notifier};
use crate::options::StoreOptions;
use crate::persist::{load_state, save_state};

/// Result of [`CartStore::add_to_cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// The artwork was already in the cart; nothing changed.
    AlreadyInCart,
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per artwork id
/// - Lines keep insertion order, oldest first
/// - Every line has quantity 1
pub struct CartStore {
    items: Vec<CartLineItem>,
    backend: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    key: String,
}

impl CartStore {
    /// Loads the cart from `backend`, empty if nothing was persisted.
    ///
    /// Duplicate ids in the persisted list keep their first occurrence. A
    /// line with an invalid artwork record (negative or oversized price, bad
    /// id, blank title) or an out-of-range quantity makes the value
    /// malformed.
    pub fn open(
        backend: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        options: &StoreOptions,
    ) -> StoreResult<Self> {
        let items = load_state(
            backend.as_ref(),
            &options.cart_key,
            options.on_malformed,
            normalize_lines,
        )?;

        info!(key = %options.cart_key, lines = items.len(), "Cart loaded");

        Ok(CartStore {
            items,
            backend,
            notifier,
            key: options.cart_key.clone(),
        })
    }

    /// Adds `artwork` with quantity 1 unless it is already in the cart.
    pub fn add_to_cart(&mut self, artwork: &Artwork) -> StoreResult<AddOutcome> {
        debug!(artwork_id = %artwork.id, "add_to_cart");

        if self.is_in_cart(&artwork.id) {
            self.notifier.notify(Notification::already_in_cart());
            return Ok(AddOutcome::AlreadyInCart);
        }

        let mut next = self.items.clone();
        next.push(CartLineItem::new(artwork.clone()));
        self.commit(next)?;

        self.notifier
            .notify(Notification::added_to_cart(&artwork.title));
        Ok(AddOutcome::Added)
    }

    /// Removes the line for `id`. Removing an absent id is not an error and
    /// still persists and notifies.
    pub fn remove_from_cart(&mut self, id: &str) -> StoreResult<()> {
        debug!(artwork_id = %id, "remove_from_cart");

        let next: Vec<CartLineItem> = self
            .items
            .iter()
            .filter(|line| line.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;

        self.notifier.notify(Notification::removed_from_cart());
        Ok(())
    }

    /// Empties the cart. No notification.
    pub fn clear_cart(&mut self) -> StoreResult<()> {
        debug!(lines = self.items.len(), "clear_cart");
        self.commit(Vec::new())
    }

    /// Sum of `price * quantity` over all lines; zero when empty.
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of all quantities.
    pub fn cart_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.items.iter().any(|line| line.id() == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn commit(&mut self, next: Vec<CartLineItem>) -> StoreResult<()> {
        save_state(self.backend.as_ref(), &self.key, &next)?;
        self.items = next;
        Ok(())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

fn normalize_lines(lines: Vec<CartLineItem>) -> Result<Vec<CartLineItem>, String> {
    let mut seen = HashSet::with_capacity(lines.len());
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        validate_artwork(&line.artwork)
            .and_then(|_| validate_quantity(line.quantity))
            .map_err(|e| format!("line '{}': {}", line.id(), e))?;
        if seen.insert(line.id().to_string()) {
            kept.push(line);
        } else {
            debug!(artwork_id = %line.id(), "Dropping duplicate persisted cart line");
        }
    }

    Ok(kept)
}

// =============================================================================
// Unit Tests
// =============================================================================
