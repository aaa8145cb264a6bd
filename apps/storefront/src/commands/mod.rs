//! # Storefront Commands
//!
//! Everything the web frontend can ask of a [`Storefront`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports + shared DTOs)
//! ├── gallery.rs    ◄─── Browse, featured, artwork detail
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── favorites.rs  ◄─── Favorite toggling and listing
//! └── session.rs    ◄─── Display language, notification draining
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  const page = await invoke('browse_gallery', {                          │
//! │    category: 'oil',                                                     │
//! │    query: 'desert'                                                      │
//! │  });                                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn browse_gallery(                                                     │
//! │      storefront: &Storefront,    ◄── Read-only commands borrow         │
//! │      category: &str,             ◄── From invoke params                │
//! │      query: &str,                                                       │
//! │  ) -> Result<Vec<ArtworkDto>, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Serialized to JSON (camelCase) for the frontend                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands take `&mut Storefront`. Every DTO is rendered in the
//! shopper's current display language.

pub mod cart;
pub mod favorites;
pub mod gallery;
pub mod session;

use serde::Serialize;

use atelier_core::{Artwork, Category};

use crate::state::Storefront;

pub use cart::{
    add_to_cart, clear_cart, get_cart, remove_from_cart, CartLineDto, CartResponse, CartTotals,
};
pub use favorites::{list_favorites, toggle_favorite, FavoriteToggled};
pub use gallery::{browse_gallery, featured_artworks, get_artwork_detail};
pub use session::{drain_notifications, get_language, list_languages, set_language, LanguageDto};

/// An artwork as the shopper sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price_cents: i64,
    /// e.g. "$120.00"
    pub price_display: String,
    pub image: String,
    pub dimensions: String,
    pub in_cart: bool,
    pub is_favorite: bool,
}

impl ArtworkDto {
    pub(crate) fn render(storefront: &Storefront, artwork: &Artwork) -> Self {
        let language = storefront.language().language();
        ArtworkDto {
            id: artwork.id.clone(),
            title: artwork.title_in(language).to_string(),
            description: artwork.description_in(language).to_string(),
            category: artwork.category,
            price_cents: artwork.price.cents(),
            price_display: artwork.price.to_string(),
            image: artwork.image.clone(),
            dimensions: artwork.dimensions.clone(),
            in_cart: storefront.cart().is_in_cart(&artwork.id),
            is_favorite: storefront.favorites().is_favorite(&artwork.id),
        }
    }
}
