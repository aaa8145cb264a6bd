//! # Session Commands
//!
//! Display language and the notification feed.

use serde::Serialize;
use tracing::debug;

use atelier_core::Language;
use atelier_store::Notification;

use crate::error::ApiResult;
use crate::state::Storefront;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<Language> for LanguageDto {
    fn from(language: Language) -> Self {
        LanguageDto {
            code: language.code(),
            label: language.label(),
        }
    }
}

/// Languages offered by the switcher.
pub fn list_languages() -> Vec<LanguageDto> {
    Language::ALL.into_iter().map(LanguageDto::from).collect()
}

pub fn get_language(storefront: &Storefront) -> LanguageDto {
    storefront.language().language().into()
}

/// Switches the display language and persists it.
///
/// Accepts tags like `"ru-RU"`. Unsupported codes select English.
pub fn set_language(storefront: &mut Storefront, code: &str) -> ApiResult<LanguageDto> {
    let language = Language::from_code(code);
    debug!(%code, %language, "set_language command");
    storefront.language_mut().set_language(language)?;
    Ok(language.into())
}

/// Takes every notice raised since the last call, oldest first.
pub fn drain_notifications(storefront: &Storefront) -> Vec<Notification> {
    storefront.notices().drain()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;

    #[test]
    fn test_language_switch() {
        let mut storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();
        assert_eq!(get_language(&storefront).code, "en");

        let dto = set_language(&mut storefront, "uz-Latn").unwrap();
        assert_eq!(dto.label, "O'zbek");
        assert_eq!(storefront.language().language(), Language::Uzbek);
        assert_eq!(get_language(&storefront).code, "uz");

        assert_eq!(set_language(&mut storefront, "fr").unwrap().code, "en");
    }

    #[test]
    fn test_list_languages() {
        let codes: Vec<_> = list_languages().into_iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "ru", "uz"]);
    }

    #[test]
    fn test_drain_empties_feed() {
        let mut storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();
        crate::commands::toggle_favorite(&mut storefront, "desert-bloom").unwrap();
        assert_eq!(drain_notifications(&storefront).len(), 1);
        assert!(drain_notifications(&storefront).is_empty());
    }
}
