//! # atelier-core: Pure Domain Logic for the Atelier Storefront
//!
//! This crate is the read-only heart of the storefront: the artwork catalog,
//! money arithmetic, localized field selection and catalog search. It has
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Gallery ──► Artwork Detail ──► Cart ──► Favorites            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          atelier-store (cart, favorites, language)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atelier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  search   │  │   │
//! │  │   │  Artwork  │  │   Money   │  │  Catalog  │  │CatalogQuery│ │   │
//! │  │   │ Language  │  │           │  │  builtin  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Artwork, Category, Language, CartLineItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The validated, read-only artwork collection
//! - [`search`] - Category + free-text catalog filtering
//! - [`validation`] - Record and input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::{Catalog, CatalogQuery, CategoryFilter, Category, Language};
//!
//! let catalog = Catalog::builtin();
//! let query = CatalogQuery::new()
//!     .category(CategoryFilter::Only(Category::Watercolor))
//!     .language(Language::English);
//!
//! for artwork in catalog.search(&query) {
//!     assert_eq!(artwork.category, Category::Watercolor);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use search::{search, CatalogQuery};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an artwork identifier.
pub const MAX_ARTWORK_ID_LEN: usize = 64;

/// Maximum quantity of a single line item.
///
/// Nothing increments quantities today, so every line holds exactly 1. The
/// bound only guards values read back from storage.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Highest accepted artwork price, in cents ($1,000,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

/// Number of artworks shown on the home page.
pub const FEATURED_ARTWORK_COUNT: usize = 3;
