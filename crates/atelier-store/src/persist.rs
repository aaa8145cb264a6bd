//! Shared load/save helpers for JSON-valued store keys.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;
use crate::options::MalformedStatePolicy;

/// Reads and decodes the value under `key`.
///
/// An absent key yields `T::default()`. `check` may normalize the decoded
/// value or reject it; a rejection is treated like a decode failure and
/// handled per `policy`.
pub(crate) fn load_state<T, F>(
    backend: &dyn KeyValueStore,
    key: &str,
    policy: MalformedStatePolicy,
    check: F,
) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
    F: FnOnce(T) -> Result<T, String>,
{
    let Some(raw) = backend.get(key)? else {
        return Ok(T::default());
    };

    let decoded = serde_json::from_str::<T>(&raw)
        .map_err(|e| e.to_string())
        .and_then(check);

    match (decoded, policy) {
        (Ok(value), _) => Ok(value),
        (Err(reason), MalformedStatePolicy::Reset) => {
            warn!(key, %reason, "Discarding malformed persisted state");
            Ok(T::default())
        }
        (Err(reason), MalformedStatePolicy::Fail) => Err(StoreError::MalformedState {
            key: key.to_string(),
            reason,
        }),
    }
}

/// Encodes `value` and writes it under `key`.
pub(crate) fn save_state<T>(backend: &dyn KeyValueStore, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    backend.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_absent_key_is_default() {
        let backend = MemoryStore::new();
        let ids: Vec<String> =
            load_state(&backend, "favorites", MalformedStatePolicy::Fail, Ok).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let backend = MemoryStore::new();
        save_state(&backend, "favorites", &["a1", "a2"]).unwrap();
        assert_eq!(
            backend.get("favorites").unwrap().as_deref(),
            Some(r#"["a1","a2"]"#)
        );
        let ids: Vec<String> =
            load_state(&backend, "favorites", MalformedStatePolicy::Fail, Ok).unwrap();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn test_malformed_reset_and_fail() {
        let backend = MemoryStore::with_entries([("favorites", "{oops")]);

        let ids: Vec<String> =
            load_state(&backend, "favorites", MalformedStatePolicy::Reset, Ok).unwrap();
        assert!(ids.is_empty());
        // Reset leaves the stored value alone
        assert_eq!(backend.get("favorites").unwrap().as_deref(), Some("{oops"));

        let err = load_state::<Vec<String>, _>(&backend, "favorites", MalformedStatePolicy::Fail, Ok)
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedState { ref key, .. } if key == "favorites"));
    }

    #[test]
    fn test_check_rejection_follows_policy() {
        let backend = MemoryStore::with_entries([("favorites", r#"["a1"]"#)]);
        let reject = |_: Vec<String>| Err::<Vec<String>, _>("nope".to_string());

        let err = load_state(&backend, "favorites", MalformedStatePolicy::Fail, reject).unwrap_err();
        assert!(matches!(err, StoreError::MalformedState { ref reason, .. } if reason == "nope"));
    }
}
