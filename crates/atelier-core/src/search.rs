//! # Catalog Search
//!
//! Produces the visible subset of the catalog for a gallery filter.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each artwork, in catalog order:                                   │
//! │                                                                         │
//! │   category filter ── All, or exact match? ──── no ──► skip             │
//! │          │                                                              │
//! │         yes                                                             │
//! │          ▼                                                              │
//! │   text (trimmed) empty? ───────────────────── yes ──► keep             │
//! │          │                                                              │
//! │          no                                                             │
//! │          ▼                                                              │
//! │   lowercase(title_in(lang)) contains text                              │
//! │     OR lowercase(description_in(lang)) contains text? ─ yes ──► keep   │
//! │          │                                                              │
//! │          no ──► skip                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No ranking. Results keep catalog order and borrow from the catalog.

use crate::types::{Artwork, CategoryFilter, Language};

/// A gallery filter configuration.
///
/// The active language is an explicit input, so the same query always
/// yields the same result for the same catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub text: String,
    pub language: Language,
}

impl CatalogQuery {
    /// Matches everything: `all` category, empty text, English.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Lowercased, trimmed search text, or `None` when only whitespace.
    pub fn normalized_text(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Returns true if `artwork` passes both the category and text predicates.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.category.matches(artwork.category)
            && match self.normalized_text() {
                None => true,
                Some(needle) => text_matches(artwork, self.language, &needle),
            }
    }
}

/// Filters `catalog` by `query`, preserving order.
///
/// Empty catalog or no match gives an empty vector, never an error.
pub fn search<'a>(catalog: &'a [Artwork], query: &CatalogQuery) -> Vec<&'a Artwork> {
    let needle = query.normalized_text();

    catalog
        .iter()
        .filter(|artwork| query.category.matches(artwork.category))
        .filter(|artwork| match &needle {
            None => true,
            Some(needle) => text_matches(artwork, query.language, needle),
        })
        .collect()
}

fn text_matches(artwork: &Artwork, language: Language, needle: &str) -> bool {
    artwork.title_in(language).to_lowercase().contains(needle)
        || artwork
            .description_in(language)
            .to_lowercase()
            .contains(needle)
}

// =============================================================================
// Unit Tests
// =============================================================================
