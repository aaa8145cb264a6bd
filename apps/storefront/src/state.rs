//! # Storefront State
//!
//! One shopper session: the catalog plus every store, all writing through
//! the same key-value backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront                                           │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │   Catalog    │  │  CartStore   │  │  Favorites   │  │  Language  │  │
//! │  │  (read-only) │  │              │  │  Store       │  │  Pref      │  │
//! │  └──────────────┘  └──────┬───────┘  └──────┬───────┘  └─────┬──────┘  │
//! │                           │                 │                │         │
//! │                           ▼                 ▼                ▼         │
//! │                  ┌─────────────────────────────────────────────────┐   │
//! │                  │  Arc<dyn KeyValueStore>  (File or Memory)       │   │
//! │                  └─────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Cart and favorites notices ──► Arc<NotificationQueue> ──► UI drains   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations need `&mut Storefront`, so a session has exactly one writer.
//! Hosts that share a session across threads wrap it in a `Mutex`.

use std::sync::Arc;

use atelier_core::Catalog;
use atelier_store::{
    CartStore, FavoritesStore, FileStore, KeyValueStore, LanguagePreference, MemoryStore,
    NotificationQueue, StoreOptions, StoreResult,
};
use tracing::info;

use crate::config::{StorageBackend, StorefrontConfig};

pub struct Storefront {
    catalog: Catalog,
    cart: CartStore,
    favorites: FavoritesStore,
    language: LanguagePreference,
    notices: Arc<NotificationQueue>,
}

impl Storefront {
    /// Opens the configured backend and loads every store from it, with the
    /// built-in catalog.
    pub fn open(config: &StorefrontConfig) -> StoreResult<Self> {
        let backend: Arc<dyn KeyValueStore> = match &config.storage {
            StorageBackend::File { path } => Arc::new(FileStore::open(path)?),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Self::with_backend(Catalog::builtin(), backend, &config.store)
    }

    pub fn with_backend(
        catalog: Catalog,
        backend: Arc<dyn KeyValueStore>,
        options: &StoreOptions,
    ) -> StoreResult<Self> {
        let notices = Arc::new(NotificationQueue::new());

        let cart = CartStore::open(backend.clone(), notices.clone(), options)?;
        let favorites = FavoritesStore::open(backend.clone(), notices.clone(), options)?;
        let language = LanguagePreference::open(backend, options)?;

        info!(
            artworks = catalog.len(),
            cart_lines = cart.items().len(),
            favorites = favorites.len(),
            language = %language.language(),
            "Storefront ready"
        );

        Ok(Storefront {
            catalog,
            cart,
            favorites,
            language,
            notices,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn language(&self) -> &LanguagePreference {
        &self.language
    }

    pub fn notices(&self) -> &NotificationQueue {
        &self.notices
    }

    pub(crate) fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub(crate) fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    pub(crate) fn language_mut(&mut self) -> &mut LanguagePreference {
        &mut self.language
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("artworks", &self.catalog.len())
            .field("cart", &self.cart)
            .field("favorites", &self.favorites)
            .field("language", &self.language)
            .field("pending_notices", &self.notices.len())
            .finish()
    }
}
