//! # Language Preference
//!
//! The shopper's chosen display language, persisted as a bare language code
//! (`"ru"`, not `"\"ru\""`) under the language key. Unknown or missing codes
//! read as English.

use std::fmt;
use std::sync::Arc;

use atelier_core::Language;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::options::StoreOptions;

pub struct LanguagePreference {
    language: Language,
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl LanguagePreference {
    pub fn open(backend: Arc<dyn KeyValueStore>, options: &StoreOptions) -> StoreResult<Self> {
        let language = backend
            .get(&options.language_key)?
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();

        info!(key = %options.language_key, %language, "Language preference loaded");

        Ok(LanguagePreference {
            language,
            backend,
            key: options.language_key.clone(),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        debug!(%language, "set_language");
        self.backend.set(&self.key, language.code())?;
        self.language = language;
        Ok(())
    }
}

impl fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("key", &self.key)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
