//! Tabbed result views keyed by identifier string.

use leptos::*;
use nika_core::TabId;

#[component]
pub fn TabBar(active: RwSignal<TabId>) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {TabId::ALL
                .iter()
                .map(|&tab| {
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || active.get() == tab
                            data-tab=tab.as_str()
                            on:click=move |_| active.set(tab)
                        >
                            {tab.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Panel shown while its tab is active. Hidden panels stay mounted so
/// result state survives tab switches.
#[component]
pub fn TabPanel(id: TabId, active: RwSignal<TabId>, children: Children) -> impl IntoView {
    view! {
        <section
            id=id.as_str()
            class="tab-content"
            class:active=move || active.get() == id
            style:display=move || if active.get() == id { "block" } else { "none" }
        >
            {children()}
        </section>
    }
}
