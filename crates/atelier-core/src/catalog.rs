//! # Catalog
//!
//! The fixed, read-only collection of artworks available in the gallery.
//!
//! A `Catalog` can only be built from records that pass
//! [`validate_artwork`](crate::validation::validate_artwork) and have unique
//! ids, so every lookup by id is unambiguous.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::search::{search, CatalogQuery};
use crate::types::{Artwork, Category};
use crate::validation::validate_artwork;

/// Validated, ordered artwork collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid records and duplicate ids.
    pub fn new(artworks: Vec<Artwork>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for artwork in &artworks {
            validate_artwork(artwork)?;
            if !seen.insert(artwork.id.as_str()) {
                return Err(CoreError::DuplicateArtwork(artwork.id.clone()));
            }
        }
        Ok(Catalog { artworks })
    }

    /// The gallery's own artworks.
    pub fn builtin() -> Self {
        Catalog {
            artworks: builtin_artworks(),
        }
    }

    /// Looks up an artwork by id.
    pub fn get(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Artwork> {
        self.get(id)
            .ok_or_else(|| CoreError::ArtworkNotFound(id.to_string()))
    }

    /// The first `n` artworks in catalog order.
    pub fn featured(&self, n: usize) -> &[Artwork] {
        &self.artworks[..n.min(self.artworks.len())]
    }

    /// Runs a gallery query against this catalog.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Artwork> {
        search(&self.artworks, query)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artwork> {
        self.artworks.iter()
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Artwork;
    type IntoIter = std::slice::Iter<'a, Artwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.artworks.iter()
    }
}

// =============================================================================
// Built-in Artworks
// =============================================================================

/// (id, [en, ru, uz] titles, [en, ru, uz] descriptions, category, dollars, dimensions)
type Entry = (
    &'static str,
    [&'static str; 3],
    [&'static str; 3],
    Category,
    i64,
    &'static str,
);

const ENTRIES: &[Entry] = &[
    (
        "desert-bloom",
        ["Desert Bloom", "Цветение пустыни", "Cho'l gullashi"],
        [
            "Spring poppies opening across the Kyzylkum sands at dawn.",
            "Весенние маки раскрываются на песках Кызылкума на рассвете.",
            "Tong saharda Qizilqum qumlarida ochilgan bahorgi lolaqizg'aldoqlar.",
        ],
        Category::Oil,
        120,
        "60 x 80 cm",
    ),
    (
        "market-day",
        ["Market Day", "Базарный день", "Bozor kuni"],
        [
            "Colour and noise of the Chorsu bazaar under its blue dome.",
            "Краски и шум базара Чорсу под голубым куполом.",
            "Ko'k gumbaz ostidagi Chorsu bozorining ranglari va shovqini.",
        ],
        Category::Watercolor,
        85,
        "40 x 50 cm",
    ),
    (
        "silk-road",
        ["Silk Road", "Шёлковый путь", "Ipak yo'li"],
        [
            "A caravan crossing the mountains, painted in layered washes.",
            "Караван пересекает горы, написанный прозрачными слоями.",
            "Tog'lardan o'tayotgan karvon, qatlamli bo'yoqlarda chizilgan.",
        ],
        Category::Watercolor,
        95,
        "50 x 70 cm",
    ),
    (
        "registan-night",
        ["Registan at Night", "Регистан ночью", "Tungi Registon"],
        [
            "The three madrasahs of Samarkand glowing under a violet sky.",
            "Три медресе Самарканда сияют под фиолетовым небом.",
            "Binafsharang osmon ostida porlayotgan Samarqandning uchta madrasasi.",
        ],
        Category::Oil,
        240,
        "90 x 120 cm",
    ),
    (
        "pomegranate",
        ["Pomegranate", "Гранат", "Anor"],
        [
            "A still life of split pomegranates on a suzani cloth.",
            "Натюрморт с разломанными гранатами на сюзане.",
            "So'zana ustidagi yorilgan anorlar natyurmorti.",
        ],
        Category::Oil,
        150,
        "50 x 60 cm",
    ),
    (
        "neon-tashkent",
        ["Neon Tashkent", "Неоновый Ташкент", "Neon Toshkent"],
        [
            "A digital cityscape of Tashkent streets reflected in rain.",
            "Цифровой городской пейзаж улиц Ташкента, отражённых в дожде.",
            "Yomg'irda aks etgan Toshkent ko'chalarining raqamli manzarasi.",
        ],
        Category::Digital,
        60,
        "Print, 42 x 59 cm",
    ),
    (
        "dreaming-ikat",
        ["Dreaming Ikat", "Сны иката", "Atlas tushlari"],
        [
            "Digital patterns inspired by hand-dyed Margilan silk.",
            "Цифровые узоры по мотивам маргиланского шёлка ручной окраски.",
            "Qo'lda bo'yalgan Marg'ilon atlasidan ilhomlangan raqamli naqshlar.",
        ],
        Category::Digital,
        55,
        "Print, 30 x 40 cm",
    ),
    (
        "aral-memory",
        ["Memory of the Aral", "Память Арала", "Orol xotirasi"],
        [
            "Collage, sand and acrylic recalling the ships left on dry land.",
            "Коллаж, песок и акрил о кораблях, оставшихся на суше.",
            "Quruqlikda qolgan kemalarni eslatuvchi kollaj, qum va akril.",
        ],
        Category::Mixed,
        180,
        "70 x 100 cm",
    ),
];

fn builtin_artworks() -> Vec<Artwork> {
    ENTRIES
        .iter()
        .map(
            |&(id, [title, title_ru, title_uz], [desc, desc_ru, desc_uz], category, dollars, dimensions)| {
                Artwork {
                    id: id.to_string(),
                    title: title.to_string(),
                    title_ru: title_ru.to_string(),
                    title_uz: title_uz.to_string(),
                    description: desc.to_string(),
                    description_ru: desc_ru.to_string(),
                    description_uz: desc_uz.to_string(),
                    category,
                    price: Money::from_major_minor(dollars, 0),
                    image: format!("/images/artworks/{}.jpg", id),
                    dimensions: dimensions.to_string(),
                }
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
