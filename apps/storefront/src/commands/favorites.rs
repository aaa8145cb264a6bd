//! # Favorites Commands

use serde::Serialize;
use tracing::debug;

use super::ArtworkDto;
use crate::error::ApiResult;
use crate::state::Storefront;

/// Result of [`toggle_favorite`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggled {
    pub id: String,
    pub is_favorite: bool,
}

/// Flips whether `id` is a favorite.
///
/// The notice names the artwork in the current display language. An id that
/// is not in the catalog is still toggled and is named by its id.
pub fn toggle_favorite(storefront: &mut Storefront, id: &str) -> ApiResult<FavoriteToggled> {
    let language = storefront.language().language();
    let display_title = storefront
        .catalog()
        .get(id)
        .map(|artwork| artwork.title_in(language).to_string())
        .unwrap_or_else(|| id.to_string());
    debug!(artwork_id = %id, %display_title, "toggle_favorite command");

    let is_favorite = storefront
        .favorites_mut()
        .toggle_favorite(id, &display_title)?;

    Ok(FavoriteToggled {
        id: id.to_string(),
        is_favorite,
    })
}

/// Favorited artworks, oldest favorite first.
///
/// Ids that are no longer in the catalog are skipped but stay persisted.
pub fn list_favorites(storefront: &Storefront) -> Vec<ArtworkDto> {
    debug!("list_favorites command");
    storefront
        .favorites()
        .ids()
        .iter()
        .filter_map(|id| storefront.catalog().get(id))
        .map(|artwork| ArtworkDto::render(storefront, artwork))
        .collect()
}
