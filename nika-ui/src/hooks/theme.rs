// nika-ui/src/hooks/theme.rs
use leptos::*;
use nika_core::Theme;

use crate::config::DASHBOARD;
use crate::hooks::{local_storage_get, local_storage_set};

/// Load the persisted theme, defaulting to dark.
fn load_theme() -> Theme {
    local_storage_get(DASHBOARD.theme_storage_key)
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or_default()
}

/// Write the theme to the document element so CSS variables switch.
fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Leptos hook for the persisted light/dark theme.
/// Returns (theme signal, toggle function). Applying and persisting happen
/// in an effect so every write path stays consistent.
pub fn use_theme() -> (ReadSignal<Theme>, impl Fn()) {
    let (theme, set_theme) = create_signal(load_theme());

    create_effect(move |_| {
        let current = theme.get();
        apply_theme(current);
        local_storage_set(DASHBOARD.theme_storage_key, current.as_str());
    });

    let toggle = move || set_theme.update(|t| *t = t.toggled());

    (theme, toggle)
}
