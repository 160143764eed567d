// nika-ui/src/components/image_results.rs
//!
//! Image analysis results: the original image with its interactive zone
//! overlay, the backend-rendered overlay image, and summary metrics.

use leptos::*;
use nika_core::ImageAnalysis;

use crate::components::ZoneOverlayView;
use crate::services::report::download_image_report;

#[component]
pub fn ImageResultsPanel(#[prop(into)] analysis: Signal<Option<ImageAnalysis>>) -> impl IntoView {
    view! {
        <div id="image-analysis">
            {move || {
                analysis
                    .get()
                    .map(|data| {
                        view! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                <ZoneOverlayView analysis=data.clone() />
                                {data
                                    .overlay_image
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <div class="card">
                                                <div class="card-header">
                                                    <h4 class="card-title">"Anomaly Overlay"</h4>
                                                </div>
                                                <div class="card-content">
                                                    <img src=src alt="Overlay" class="w-full rounded" />
                                                </div>
                                            </div>
                                        }
                                    })}
                            </div>
                            <div class="metrics-grid mt-6">
                                <div class="metric-card">
                                    <div class="metric-value">{data.anomalies_detected}</div>
                                    <div class="metric-label">"Anomalies Detected"</div>
                                </div>
                                <div class="metric-card">
                                    <div class="metric-value">
                                        {format!("{}%", data.confidence_score)}
                                    </div>
                                    <div class="metric-label">"Confidence Score"</div>
                                </div>
                            </div>
                            <button class="btn mt-4" on:click=move |_| download_image_report()>
                                "Download Report"
                            </button>
                        }
                    })
            }}
        </div>
    }
}
