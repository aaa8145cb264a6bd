//! # Gallery Commands
//!
//! Catalog browsing: the filtered gallery grid, the home page's featured
//! strip and the single-artwork detail page.

use tracing::debug;

use atelier_core::{CatalogQuery, CategoryFilter, FEATURED_ARTWORK_COUNT};

use super::ArtworkDto;
use crate::error::ApiResult;
use crate::state::Storefront;

/// Filters the catalog by category and free text.
///
/// ## Arguments
/// * `category` - `"all"` or a category name (`"oil"`, `"watercolor"`, ...)
/// * `query` - Case-insensitive substring matched against the title and
///   description in the current language. Blank means no text filter.
///
/// ## Returns
/// Matching artworks in catalog order
pub fn browse_gallery(
    storefront: &Storefront,
    category: &str,
    query: &str,
) -> ApiResult<Vec<ArtworkDto>> {
    let filter: CategoryFilter = category.parse()?;
    let language = storefront.language().language();
    debug!(%category, %query, %language, "browse_gallery command");

    let query = CatalogQuery::new()
        .category(filter)
        .text(query)
        .language(language);

    Ok(storefront
        .catalog()
        .search(&query)
        .into_iter()
        .map(|artwork| ArtworkDto::render(storefront, artwork))
        .collect())
}

/// The first catalog entries, shown on the home page.
pub fn featured_artworks(storefront: &Storefront) -> Vec<ArtworkDto> {
    debug!("featured_artworks command");
    storefront
        .catalog()
        .featured(FEATURED_ARTWORK_COUNT)
        .iter()
        .map(|artwork| ArtworkDto::render(storefront, artwork))
        .collect()
}

/// One artwork by id.
pub fn get_artwork_detail(storefront: &Storefront, id: &str) -> ApiResult<ArtworkDto> {
    debug!(artwork_id = %id, "get_artwork_detail command");
    let artwork = storefront.catalog().require(id)?;
    Ok(ArtworkDto::render(storefront, artwork))
}
