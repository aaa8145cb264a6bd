//! # Notifications
//!
//! Fire-and-forget messages the stores emit after user-visible interactions
//! (the frontend shows them as toasts).
//!
//! `Notifier::notify` returns nothing, so a notifier has no way to fail a
//! store operation or roll back its state.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use ts_rs::TS;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AddedToCart,
    AlreadyInCart,
    RemovedFromCart,
    AddedToFavorites,
    RemovedFromFavorites,
}

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    #[ts(as = "String")]
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, description: String) -> Self {
        Notification {
            kind,
            title: title.to_string(),
            description,
            issued_at: Utc::now(),
        }
    }

    /// `artwork_title` is the default-language title.
    pub fn added_to_cart(artwork_title: &str) -> Self {
        Self::new(
            NotificationKind::AddedToCart,
            "Added to cart",
            format!("{} has been added to your cart", artwork_title),
        )
    }

    pub fn already_in_cart() -> Self {
        Self::new(
            NotificationKind::AlreadyInCart,
            "Already in cart",
            "This artwork is already in your cart".to_string(),
        )
    }

    pub fn removed_from_cart() -> Self {
        Self::new(
            NotificationKind::RemovedFromCart,
            "Removed from cart",
            "Item has been removed from your cart".to_string(),
        )
    }

    pub fn added_to_favorites(display_title: &str) -> Self {
        Self::new(
            NotificationKind::AddedToFavorites,
            "Added to favorites",
            format!("{} has been added to your favorites", display_title),
        )
    }

    pub fn removed_from_favorites(display_title: &str) -> Self {
        Self::new(
            NotificationKind::RemovedFromFavorites,
            "Removed from favorites",
            format!("{} has been removed from your favorites", display_title),
        )
    }
}

/// Receives notifications. Delivery is best-effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

// =============================================================================
// Notification Queue
// =============================================================================

/// Buffers notifications until the UI drains them, and logs each one.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        info!(
            kind = ?notification.kind,
            title = %notification.title,
            "{}",
            notification.description
        );
        // A poisoned queue still accepts notices; losing one is acceptable,
        // failing the caller is not.
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
