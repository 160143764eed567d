// nika-ui/src/app.rs
//!
//! Composition root. Every service the panels need — alerts, chart and map
//! backends, result state — is constructed here and injected; no component
//! reaches for a global.

use std::rc::Rc;

use leptos::*;
use nika_core::{
    initial_tab, CsvAnalysis, ImageAnalysis, TabId, UploadKind, UploadResponse,
};
use web_sys::UrlSearchParams;

use crate::components::{
    AlertSink, AlertStack, CsvResultsPanel, ImageResultsPanel, TabBar, TabPanel, ThemeToggle,
    UploadArea,
};
use crate::services::{CanvasChartBackend, CanvasMapBackend, ChartBackend, MapBackend};

#[component]
pub fn App() -> impl IntoView {
    let alerts = AlertSink::new();
    provide_context(alerts);

    let csv_results = create_rw_signal(None::<CsvAnalysis>);
    let image_results = create_rw_signal(None::<ImageAnalysis>);
    let active_tab = create_rw_signal(initial_tab(query_tab().as_deref(), false, false));

    let chart_backend: Rc<dyn ChartBackend> = Rc::new(CanvasChartBackend);
    let map_backend: Rc<dyn MapBackend> = Rc::new(CanvasMapBackend);

    let on_csv_uploaded = move |(file_name, body): (String, String)| {
        match serde_json::from_str::<UploadResponse<CsvAnalysis>>(&body) {
            Ok(response) if response.success => {
                if let Some(data) = response.data {
                    csv_results.set(Some(data));
                }
                alerts.success(format!("{file_name} uploaded successfully!"));
                active_tab.set(TabId::CsvResults);
            }
            Ok(response) => {
                alerts.error(response.error.unwrap_or_else(|| "Upload failed".to_string()));
            }
            Err(_) => reload_page(),
        }
    };

    let on_image_uploaded = move |(file_name, body): (String, String)| {
        match serde_json::from_str::<UploadResponse<ImageAnalysis>>(&body) {
            Ok(response) if response.success => {
                if let Some(data) = response.data {
                    image_results.set(Some(data));
                }
                alerts.success(format!("{file_name} uploaded successfully!"));
                active_tab.set(TabId::ImageResults);
            }
            Ok(response) => {
                alerts.error(response.error.unwrap_or_else(|| "Upload failed".to_string()));
            }
            Err(_) => reload_page(),
        }
    };

    view! {
        <div class="min-h-screen">
            <header class="flex items-center justify-between px-6 py-4">
                <h1 class="text-xl font-semibold">"NIKA Dashboard"</h1>
                <ThemeToggle />
            </header>
            <AlertStack />
            <main class="px-6 pb-12">
                <TabBar active=active_tab />
                <TabPanel id=TabId::Upload active=active_tab>
                    <div class="grid md:grid-cols-2 gap-6">
                        <UploadArea kind=UploadKind::Csv on_uploaded=on_csv_uploaded />
                        <UploadArea kind=UploadKind::Image on_uploaded=on_image_uploaded />
                    </div>
                </TabPanel>
                <TabPanel id=TabId::CsvResults active=active_tab>
                    <CsvResultsPanel
                        analysis=csv_results
                        charts=Rc::clone(&chart_backend)
                        map=Rc::clone(&map_backend)
                    />
                </TabPanel>
                <TabPanel id=TabId::ImageResults active=active_tab>
                    <ImageResultsPanel analysis=image_results />
                </TabPanel>
            </main>
        </div>
    }
}

/// Explicit tab selection from the page URL, when present.
fn query_tab() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("tab")
}

/// A 200 response that is not JSON means the backend rendered a results
/// page instead; reload to pick it up.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("Failed to reload after upload: {e:?}");
        }
    }
}
