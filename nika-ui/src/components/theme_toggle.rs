// nika-ui/src/components/theme_toggle.rs
use leptos::*;
use nika_core::Theme;

use crate::hooks::use_theme;

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32 1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"/>
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
        </svg>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, toggle) = use_theme();

    view! {
        <button
            id="theme-toggle"
            class="rounded-full p-2 transition-colors hover:bg-white/10"
            on:click=move |_| toggle()
        >
            {move || if theme.get() == Theme::Dark {
                view! { <SunIcon /> }.into_view()
            } else {
                view! { <MoonIcon /> }.into_view()
            }}
        </button>
    }
}
