//! # Atelier Storefront
//!
//! Session layer for the Atelier art storefront. Owns one shopper's state
//! and exposes it to the web frontend as commands.
//!
//! ## Module Organization
//! ```text
//! atelier_storefront/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── config.rs       ◄─── storefront.toml + environment
//! ├── state.rs        ◄─── Storefront (catalog + stores + notices)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, ArtworkDto
//! │   ├── gallery.rs  ◄─── Browse / featured / detail
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── favorites.rs◄─── Favorites
//! │   └── session.rs  ◄─── Language, notifications
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use atelier_storefront::{commands, Storefront, StorefrontConfig};
//!
//! let mut storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();
//!
//! let cart = commands::add_to_cart(&mut storefront, "desert-bloom").unwrap();
//! assert_eq!(cart.totals.item_count, 1);
//!
//! let notices = commands::drain_notifications(&storefront);
//! assert_eq!(notices[0].title, "Added to cart");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, StorageBackend, StorefrontConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::Storefront;

/// Starts a storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, DEBUG for atelier crates, RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → ATELIER_* environment                │
/// │                                                                         │
/// │  3. Open Storage ─────────────────────────────────────────────────────► │
/// │     • FileStore at the data path, or MemoryStore                        │
/// │                                                                         │
/// │  4. Load Stores ──────────────────────────────────────────────────────► │
/// │     • Cart, favorites and language read back from storage               │
/// │     • Unreadable values reset or fail per `on_malformed`                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn launch(config_path: Option<PathBuf>) -> ApiResult<Storefront> {
    init_tracing();

    info!("Starting Atelier storefront");

    let config = StorefrontConfig::load(config_path)?;
    info!(storage = ?config.storage, "Configuration loaded");

    Ok(Storefront::open(&config)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atelier_store=trace` - Trace the stores only
/// - Default: INFO, DEBUG for atelier crates
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,atelier=debug"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::{MalformedStatePolicy, NotificationKind};

    fn file_config(path: PathBuf) -> StorefrontConfig {
        StorefrontConfig {
            storage: StorageBackend::File { path },
            ..StorefrontConfig::in_memory()
        }
    }

    #[test]
    fn test_shopping_session_end_to_end() {
        init_tracing();
        let mut storefront = Storefront::open(&StorefrontConfig::in_memory()).unwrap();

        commands::add_to_cart(&mut storefront, "desert-bloom").unwrap();
        commands::add_to_cart(&mut storefront, "market-day").unwrap();
        commands::add_to_cart(&mut storefront, "desert-bloom").unwrap();
        commands::toggle_favorite(&mut storefront, "market-day").unwrap();
        let cart = commands::remove_from_cart(&mut storefront, "desert-bloom").unwrap();

        assert_eq!(cart.totals.total_cents, 8_500);
        assert_eq!(cart.totals.total_quantity, 1);

        let gallery = commands::browse_gallery(&storefront, "all", "").unwrap();
        let market = gallery.iter().find(|a| a.id == "market-day").unwrap();
        assert!(market.in_cart);
        assert!(market.is_favorite);

        let kinds: Vec<_> = commands::drain_notifications(&storefront)
            .into_iter()
            .map(|n| n.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::AddedToCart,
                NotificationKind::AddedToCart,
                NotificationKind::AlreadyInCart,
                NotificationKind::AddedToFavorites,
                NotificationKind::RemovedFromCart,
            ]
        );
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path().join("storefront.json"));

        {
            let mut storefront = Storefront::open(&config).unwrap();
            commands::add_to_cart(&mut storefront, "registan-night").unwrap();
            commands::toggle_favorite(&mut storefront, "neon-tashkent").unwrap();
            commands::set_language(&mut storefront, "ru").unwrap();
        }

        let storefront = Storefront::open(&config).unwrap();
        let cart = commands::get_cart(&storefront);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, "registan-night");
        assert_eq!(cart.totals.total_cents, 24_000);
        assert_eq!(commands::list_favorites(&storefront)[0].id, "neon-tashkent");
        assert_eq!(commands::get_language(&storefront).code, "ru");
        assert!(commands::drain_notifications(&storefront).is_empty());
    }

    #[test]
    fn test_malformed_file_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(&path, r#"{"cart": "not a cart", "language": "uz"}"#).unwrap();

        // Reset: the cart starts empty, other keys still load
        let storefront = Storefront::open(&file_config(path.clone())).unwrap();
        assert!(storefront.cart().is_empty());
        assert_eq!(commands::get_language(&storefront).code, "uz");

        let mut strict = file_config(path);
        strict.store.on_malformed = MalformedStatePolicy::Fail;
        let err = ApiError::from(Storefront::open(&strict).unwrap_err());
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
