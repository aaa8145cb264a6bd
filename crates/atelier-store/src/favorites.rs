//! # Favorites Store
//!
//! The set of favorited artwork ids, persisted under the favorites key as a
//! JSON array of strings.
//!
//! Toggling is the only mutation. There is no separate add or remove, so
//! every call is a valid favorite ↔ not-favorite transition.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::notify::{Notification, Notifier};
use crate::options::StoreOptions;
use crate::persist::{load_state, save_state};

/// Favorited artwork ids. No duplicates; kept in the order they were added.
pub struct FavoritesStore {
    ids: Vec<String>,
    backend: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    key: String,
}

impl FavoritesStore {
    /// Loads favorites from `backend`, empty if nothing was persisted.
    pub fn open(
        backend: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        options: &StoreOptions,
    ) -> StoreResult<Self> {
        let ids = load_state(
            backend.as_ref(),
            &options.favorites_key,
            options.on_malformed,
            |ids: Vec<String>| Ok(dedup(ids)),
        )?;

        info!(key = %options.favorites_key, count = ids.len(), "Favorites loaded");

        Ok(FavoritesStore {
            ids,
            backend,
            notifier,
            key: options.favorites_key.clone(),
        })
    }

    /// Flips membership of `id` and returns the new membership.
    ///
    /// `display_title` is only used in the notification text, so callers pass
    /// the title in the shopper's current language.
    pub fn toggle_favorite(&mut self, id: &str, display_title: &str) -> StoreResult<bool> {
        let was_favorite = self.is_favorite(id);
        debug!(artwork_id = %id, was_favorite, "toggle_favorite");

        let next: Vec<String> = if was_favorite {
            self.ids.iter().filter(|fav| *fav != id).cloned().collect()
        } else {
            let mut next = self.ids.clone();
            next.push(id.to_string());
            next
        };

        save_state(self.backend.as_ref(), &self.key, &next)?;
        self.ids = next;

        let notification = if was_favorite {
            Notification::removed_from_favorites(display_title)
        } else {
            Notification::added_to_favorites(display_title)
        };
        self.notifier.notify(notification);

        Ok(!was_favorite)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Favorited ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
