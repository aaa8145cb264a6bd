//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                            │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add_to_cart            │
//! │  │  Cart    │                  │          │───┘ (already in cart:      │
//! │  └──────────┘                  └──────────┘      notice only)          │
//! │       ▲                          │      │                               │
//! │       │     remove_from_cart     │      │ clear_cart                    │
//! │       └──────(last line)─────────┘      │                               │
//! │       └─────────────────────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the full cart so the frontend never computes
//! totals itself.

use serde::Serialize;
use tracing::debug;

use atelier_core::CartLineItem;
use atelier_store::CartStore;

use crate::error::ApiResult;
use crate::state::Storefront;

/// One cart line, localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub id: String,
    pub title: String,
    pub image: String,
    pub dimensions: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

/// Cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub item_count: usize,
    /// Sum of quantities (the header badge).
    pub total_quantity: u32,
    pub total_cents: i64,
}

impl From<&CartStore> for CartTotals {
    fn from(cart: &CartStore) -> Self {
        CartTotals {
            item_count: cart.items().len(),
            total_quantity: cart.cart_count(),
            total_cents: cart.cart_total().cents(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineDto>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn render(storefront: &Storefront) -> Self {
        let language = storefront.language().language();
        let cart = storefront.cart();
        let line = |item: &CartLineItem| CartLineDto {
            id: item.id().to_string(),
            title: item.artwork.title_in(language).to_string(),
            image: item.artwork.image.clone(),
            dimensions: item.artwork.dimensions.clone(),
            price_cents: item.artwork.price.cents(),
            quantity: item.quantity,
            line_total_cents: item.line_total().cents(),
        };

        CartResponse {
            items: cart.items().iter().map(line).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(storefront: &Storefront) -> CartResponse {
    debug!("get_cart command");
    CartResponse::render(storefront)
}

/// Adds an artwork to the cart.
///
/// ## Behavior
/// - Not in cart: appended with quantity 1, "Added to cart" notice
/// - Already in cart: nothing changes, "Already in cart" notice
/// - Unknown id: `NOT_FOUND`, nothing changes
///
/// The line stores a snapshot of the artwork, so later catalog edits do not
/// touch it.
pub fn add_to_cart(storefront: &mut Storefront, id: &str) -> ApiResult<CartResponse> {
    debug!(artwork_id = %id, "add_to_cart command");

    let artwork = storefront.catalog().require(id)?.clone();
    storefront.cart_mut().add_to_cart(&artwork)?;

    Ok(CartResponse::render(storefront))
}

/// Removes the line for `id`. Removing an id that is not in the cart is not
/// an error.
pub fn remove_from_cart(storefront: &mut Storefront, id: &str) -> ApiResult<CartResponse> {
    debug!(artwork_id = %id, "remove_from_cart command");
    storefront.cart_mut().remove_from_cart(id)?;
    Ok(CartResponse::render(storefront))
}

/// Empties the cart.
pub fn clear_cart(storefront: &mut Storefront) -> ApiResult<CartResponse> {
    debug!("clear_cart command");
    storefront.cart_mut().clear_cart()?;
    Ok(CartResponse::render(storefront))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{drain_notifications, set_language};
    use crate::config::StorefrontConfig;
    use crate::error::ErrorCode;
    use atelier_store::NotificationKind;

    fn storefront() -> Storefront {
        Storefront::open(&StorefrontConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_add_and_totals() {
        let mut storefront = storefront();
        add_to_cart(&mut storefront, "desert-bloom").unwrap();
        let cart = add_to_cart(&mut storefront, "market-day").unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].id, "desert-bloom");
        assert_eq!(cart.items[1].quantity, 1);
        assert_eq!(
            cart.totals,
            CartTotals {
                item_count: 2,
                total_quantity: 2,
                total_cents: 20_500,
            }
        );
    }

    #[test]
    fn test_duplicate_add_only_notifies() {
        let mut storefront = storefront();
        add_to_cart(&mut storefront, "silk-road").unwrap();
        let cart = add_to_cart(&mut storefront, "silk-road").unwrap();

        assert_eq!(cart.items.len(), 1);
        let kinds: Vec<_> = drain_notifications(&storefront)
            .into_iter()
            .map(|n| n.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::AddedToCart, NotificationKind::AlreadyInCart]
        );
    }

    #[test]
    fn test_add_unknown_id() {
        let mut storefront = storefront();
        let err = add_to_cart(&mut storefront, "lost-masterpiece").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Artwork not found: lost-masterpiece");
        assert!(get_cart(&storefront).items.is_empty());
        assert!(drain_notifications(&storefront).is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut storefront = storefront();
        add_to_cart(&mut storefront, "desert-bloom").unwrap();
        add_to_cart(&mut storefront, "market-day").unwrap();

        let cart = remove_from_cart(&mut storefront, "desert-bloom").unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.totals.total_cents, 8_500);

        // still notifies even though nothing was removed
        drain_notifications(&storefront);
        remove_from_cart(&mut storefront, "desert-bloom").unwrap();
        assert_eq!(drain_notifications(&storefront).len(), 1);

        let cart = clear_cart(&mut storefront).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.totals.total_cents, 0);
        assert!(drain_notifications(&storefront).is_empty());
    }

    #[test]
    fn test_lines_follow_display_language() {
        let mut storefront = storefront();
        add_to_cart(&mut storefront, "market-day").unwrap();
        set_language(&mut storefront, "ru").unwrap();
        assert_eq!(get_cart(&storefront).items[0].title, "Базарный день");
    }

    #[test]
    fn test_added_notice_keeps_default_title() {
        let mut storefront = storefront();
        set_language(&mut storefront, "ru").unwrap();
        add_to_cart(&mut storefront, "market-day").unwrap();

        let notices = drain_notifications(&storefront);
        assert_eq!(notices[0].kind, NotificationKind::AddedToCart);
        assert_eq!(
            notices[0].description,
            "Market Day has been added to your cart"
        );
        // the cart line itself is localized
        assert_eq!(get_cart(&storefront).items[0].title, "Базарный день");
    }

    #[test]
    fn test_serialized_shape() {
        let mut storefront = storefront();
        let cart = add_to_cart(&mut storefront, "desert-bloom").unwrap();
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["items"][0]["lineTotalCents"], 12_000);
        assert_eq!(value["totals"]["totalQuantity"], 1);
    }
}
