//! # atelier-store: Client-Side Commerce State
//!
//! The shopper's mutable state: cart, favorites and display language. Each
//! store is an explicitly constructed object that owns its data, and every
//! mutation ends with a synchronous write to the key-value backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     atelier-store (THIS CRATE)                          │
//! │                                                                         │
//! │   ┌──────────────┐   ┌────────────────┐   ┌────────────────────┐       │
//! │   │  CartStore   │   │ FavoritesStore │   │ LanguagePreference │       │
//! │   │  key "cart"  │   │ key "favorites"│   │  key "language"    │       │
//! │   └──────┬───────┘   └───────┬────────┘   └─────────┬──────────┘       │
//! │          │  write-through    │                      │                   │
//! │          ▼                   ▼                      ▼                   │
//! │   ┌─────────────────────────────────────────────────────────────┐      │
//! │   │        Arc<dyn KeyValueStore>  (MemoryStore | FileStore)    │      │
//! │   └─────────────────────────────────────────────────────────────┘      │
//! │                                                                         │
//! │   Arc<dyn Notifier> ◄── "Added to cart", "Removed from favorites", ... │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! Mutating operations take `&mut self` and the underlying collections are
//! private, so the owning store is the only code that can change them.
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use atelier_core::Catalog;
//! use atelier_store::{CartStore, MemoryStore, NotificationQueue, StoreOptions};
//!
//! let backend = Arc::new(MemoryStore::new());
//! let notices = Arc::new(NotificationQueue::new());
//! let mut cart = CartStore::open(backend, notices.clone(), &StoreOptions::default()).unwrap();
//!
//! let catalog = Catalog::builtin();
//! cart.add_to_cart(catalog.get("desert-bloom").unwrap()).unwrap();
//! assert_eq!(cart.cart_count(), 1);
//! assert_eq!(notices.drain().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod favorites;
pub mod kv;
pub mod notify;
pub mod options;
pub mod preferences;

mod persist;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::{AddOutcome, CartStore};
pub use error::{StoreError, StoreResult};
pub use favorites::FavoritesStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use notify::{Notification, NotificationKind, NotificationQueue, Notifier};
pub use options::{MalformedStatePolicy, StoreOptions};
pub use preferences::LanguagePreference;
