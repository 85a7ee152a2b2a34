//! Typed JSON helpers over `localStorage`. Failures never surface to the
//! user; a malformed value is logged and treated as absent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed {key} preferences: {err}");
            None
        }
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else { return };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                log::warn!("could not persist {key} preferences");
            }
        }
        Err(err) => log::warn!("could not serialize {key} preferences: {err}"),
    }
}

pub fn has_key(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .is_some()
}
