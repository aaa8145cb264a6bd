//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Artwork      │   │  CartLineItem   │   │    Language     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  artwork (flat) │   │  English (en)   │       │
//! │  │  title{,Ru,Uz}  │   │  quantity       │   │  Russian (ru)   │       │
//! │  │  category       │   └─────────────────┘   │  Uzbek   (uz)   │       │
//! │  │  price (Money)  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │ CategoryFilter  │                             │
//! │  │  oil            │   │  All            │                             │
//! │  │  watercolor     │   │  Only(Category) │                             │
//! │  │  digital        │   └─────────────────┘                             │
//! │  │  mixed          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! Artwork fields serialize in camelCase (`titleRu`, `descriptionUz`, ...).
//! A cart line is the full artwork object plus an integer `quantity`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The medium an artwork belongs to. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Oil,
    Watercolor,
    Digital,
    Mixed,
}

impl Category {
    /// Every category, in the order the gallery shows its filter buttons.
    pub const ALL: [Category; 4] = [
        Category::Oil,
        Category::Watercolor,
        Category::Digital,
        Category::Mixed,
    ];

    /// Wire name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Oil => "oil",
            Category::Watercolor => "watercolor",
            Category::Digital => "digital",
            Category::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Gallery category filter: the `all` wildcard or one exact category.
///
/// Matching is exact. There is no hierarchy between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if a record of `category` passes this filter.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// Parses `"all"` or a category name, exactly as the gallery buttons send them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: std::iter::once("all".to_string())
                    .chain(Category::ALL.iter().map(|c| c.to_string()))
                    .collect(),
            })
    }
}

// =============================================================================
// Language
// =============================================================================

/// A supported display language. English is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "uz")]
    Uzbek,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 3] = [Language::English, Language::Russian, Language::Uzbek];

    /// Resolves a language code, falling back to English.
    ///
    /// Only the primary subtag is considered, case-insensitively, so
    /// `"ru-RU"` and `"RU"` both select Russian. Unknown codes never fail.
    ///
    /// ```rust
    /// use atelier_core::Language;
    ///
    /// assert_eq!(Language::from_code("uz"), Language::Uzbek);
    /// assert_eq!(Language::from_code("ru-RU"), Language::Russian);
    /// assert_eq!(Language::from_code("de"), Language::English);
    /// ```
    pub fn from_code(code: &str) -> Self {
        let primary = code.trim().split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ru" => Language::Russian,
            "uz" => Language::Uzbek,
            _ => Language::English,
        }
    }

    /// The two-letter code stored in preferences.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Uzbek => "uz",
        }
    }

    /// The language's name for itself, as shown in the switcher.
    pub const fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Русский",
            Language::Uzbek => "O'zbek",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Artwork
// =============================================================================

/// One purchasable piece from the catalog.
///
/// Immutable once loaded. Stores and search only ever borrow or clone it,
/// and refer to it by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique catalog identifier.
    pub id: String,

    pub title: String,
    pub title_ru: String,
    pub title_uz: String,

    pub description: String,
    pub description_ru: String,
    pub description_uz: String,

    pub category: Category,

    /// Never negative. Serialized in major units (`120` for $120.00).
    #[serde(with = "crate::money::major_units")]
    #[ts(type = "number")]
    pub price: Money,

    /// Image URL. Not validated here.
    pub image: String,

    /// Free-form, e.g. "60 x 80 cm".
    pub dimensions: String,
}

impl Artwork {
    /// Title in `language`. No fallback: an empty localized title stays empty.
    pub fn title_in(&self, language: Language) -> &str {
        match language {
            Language::English => &self.title,
            Language::Russian => &self.title_ru,
            Language::Uzbek => &self.title_uz,
        }
    }

    /// Description in `language`, same rules as [`Artwork::title_in`].
    pub fn description_in(&self, language: Language) -> &str {
        match language {
            Language::English => &self.description,
            Language::Russian => &self.description_ru,
            Language::Uzbek => &self.description_uz,
        }
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A cart entry: an artwork snapshot plus a quantity.
///
/// The artwork is flattened so the persisted object is the artwork's own
/// fields with `quantity` alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub artwork: Artwork,

    /// Always 1 today; no operation changes it.
    pub quantity: u32,
}

impl CartLineItem {
    /// Creates a line with quantity 1.
    pub fn new(artwork: Artwork) -> Self {
        CartLineItem {
            artwork,
            quantity: 1,
        }
    }

    /// The artwork id this line refers to.
    #[inline]
    pub fn id(&self) -> &str {
        &self.artwork.id
    }

    /// price × quantity
    #[inline]
    pub fn line_total(&self) -> Money {
        self.artwork.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn artwork(id: &str, title: &str, category: Category, price_cents: i64) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: title.to_string(),
            title_ru: format!("{} (ru)", title),
            title_uz: format!("{} (uz)", title),
            description: format!("About {}", title),
            description_ru: format!("О картине {}", title),
            description_uz: format!("{} haqida", title),
            category,
            price: Money::from_cents(price_cents),
            image: format!("/images/{}.jpg", id),
            dimensions: "50 x 70 cm".to_string(),
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("oil".parse::<Category>().unwrap(), Category::Oil);
        assert!("Oil".parse::<Category>().is_err());
        assert!("sculpture".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_filter_parse_and_match() {
        let all: CategoryFilter = "all".parse().unwrap();
        assert_eq!(all, CategoryFilter::All);
        assert!(all.matches(Category::Digital));

        let oil: CategoryFilter = "oil".parse().unwrap();
        assert!(oil.matches(Category::Oil));
        assert!(!oil.matches(Category::Mixed));

        let err = "everything".parse::<CategoryFilter>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref allowed, .. } if allowed.len() == 5));
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("ru"), Language::Russian);
        assert_eq!(Language::from_code("UZ"), Language::Uzbek);
        assert_eq!(Language::from_code("uz_Latn"), Language::Uzbek);
        assert_eq!(Language::from_code(""), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);

        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
    }

    #[test]
    fn test_localized_fields_have_no_fallback() {
        let mut art = artwork("a1", "Desert Bloom", Category::Oil, 12000);
        assert_eq!(art.title_in(Language::Russian), "Desert Bloom (ru)");
        assert_eq!(art.description_in(Language::Uzbek), "Desert Bloom haqida");

        art.title_uz.clear();
        assert_eq!(art.title_in(Language::Uzbek), "");
    }

    #[test]
    fn test_artwork_serializes_camel_case() {
        let art = artwork("a1", "Desert Bloom", Category::Watercolor, 12000);
        let value = serde_json::to_value(&art).unwrap();
        assert_eq!(value["titleRu"], "Desert Bloom (ru)");
        assert_eq!(value["descriptionUz"], "Desert Bloom haqida");
        assert_eq!(value["category"], "watercolor");
        assert_eq!(value["price"], 120);
    }

    #[test]
    fn test_cart_line_reads_major_unit_price() {
        let json = r#"{"id":"a1","title":"Desert Bloom","titleRu":"","titleUz":"",
            "description":"","descriptionRu":"","descriptionUz":"","category":"oil",
            "price":120,"image":"","dimensions":"","quantity":1}"#;
        let line: CartLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(line.artwork.price, Money::from_major_minor(120, 0));
        assert_eq!(line.line_total().to_string(), "$120.00");
    }

    #[test]
    fn test_cart_line_is_flat_artwork_plus_quantity() {
        let line = CartLineItem::new(artwork("a1", "Desert Bloom", Category::Oil, 12000));
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["quantity"], 1);
        assert!(value.get("artwork").is_none());
        assert_eq!(line.line_total().cents(), 12000);
    }
}
