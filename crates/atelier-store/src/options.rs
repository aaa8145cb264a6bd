//! # Store Options
//!
//! Storage keys and the policy for persisted values that cannot be read.
//! Embedded in the storefront configuration file as the `[store]` table.

use serde::{Deserialize, Serialize};

/// Default key of the persisted cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Default key of the persisted favorites.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Default key of the persisted display language.
pub const DEFAULT_LANGUAGE_KEY: &str = "language";

/// What a store does when its persisted value is unreadable at open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedStatePolicy {
    /// Log a warning and start empty. The bad value stays until the next
    /// mutation overwrites it.
    #[default]
    Reset,

    /// Refuse to open the store.
    Fail,
}

impl std::str::FromStr for MalformedStatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(MalformedStatePolicy::Reset),
            "fail" => Ok(MalformedStatePolicy::Fail),
            other => Err(format!("unknown malformed-state policy: {}", other)),
        }
    }
}

/// Keys and load policy shared by every store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub cart_key: String,
    pub favorites_key: String,
    pub language_key: String,
    pub on_malformed: MalformedStatePolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            cart_key: DEFAULT_CART_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            language_key: DEFAULT_LANGUAGE_KEY.to_string(),
            on_malformed: MalformedStatePolicy::Reset,
        }
    }
}
