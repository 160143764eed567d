// nika-ui/src/hooks/storage.rs
//!
//! Thin localStorage helpers. Storage can be absent or blocked (private
//! browsing, embedded webviews); reads fall back to None and writes are
//! logged, never surfaced.

/// Read a key from localStorage, if storage is available.
pub fn local_storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a key to localStorage, logging on failure.
pub fn local_storage_set(key: &str, value: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };

    if let Err(e) = storage.set_item(key, value) {
        log::warn!("Failed to persist {key} to localStorage: {e:?}");
    }
}
