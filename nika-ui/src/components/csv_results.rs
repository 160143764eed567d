// nika-ui/src/components/csv_results.rs
//!
//! CSV analysis results: metrics grid, anomaly cards, summary charts and
//! the anomaly map. Chart and map backends are injected by the composition
//! root; a null backend leaves the surfaces blank.

use std::rc::Rc;

use leptos::*;
use nika_core::{Anomaly, ChartSpec, CsvAnalysis, GeoMarker};
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::services::report::download_csv_report;
use crate::services::{ChartBackend, MapBackend};

#[component]
fn MetricCard(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-value">{value}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}

#[component]
fn ChartCanvas(
    id: &'static str,
    spec: ChartSpec,
    backend: Rc<dyn ChartBackend>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas.unchecked_ref::<HtmlCanvasElement>();
        if let Err(e) = backend.render(canvas, &spec) {
            log::warn!("Chart {id} failed to render: {e:?}");
        }
    });

    view! { <canvas id=id width="360" height="220" node_ref=canvas_ref></canvas> }
}

#[component]
fn MapCanvas(markers: Vec<GeoMarker>, backend: Rc<dyn MapBackend>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas.unchecked_ref::<HtmlCanvasElement>();
        if let Err(e) = backend.render(canvas, &markers) {
            log::warn!("Anomaly map failed to render: {e:?}");
        }
    });

    view! {
        <div class="map-container" id="anomaly-map">
            <canvas width="720" height="320" node_ref=canvas_ref></canvas>
        </div>
    }
}

#[component]
fn AnomalyCard(anomaly: Anomaly) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h4 class="card-title">{anomaly.kind.clone()}</h4>
                <span class=format!("badge {}", anomaly.severity.badge_class())>
                    {anomaly.severity.as_str()}
                </span>
            </div>
            <div class="card-content">
                <p>{anomaly.description.clone()}</p>
                <div class="flex justify-between items-center mt-2">
                    <span class="text-sm text-muted">{format!("Row: {}", anomaly.row)}</span>
                    <span class="text-sm font-medium">
                        {format!("Confidence: {}%", anomaly.confidence)}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CsvResultsPanel(
    #[prop(into)] analysis: Signal<Option<CsvAnalysis>>,
    charts: Rc<dyn ChartBackend>,
    map: Rc<dyn MapBackend>,
) -> impl IntoView {
    view! {
        <div id="csv-results-body">
            {move || {
                let charts = Rc::clone(&charts);
                let map = Rc::clone(&map);
                analysis
                    .get()
                    .map(|data| {
                        let metrics = data.metrics.clone();
                        let normal = (metrics.total_rows - metrics.anomalies_found.min(metrics.total_rows)) as f64;
                        let distribution = ChartSpec::anomaly_distribution(
                            normal,
                            metrics.anomalies_found as f64,
                        );
                        // TODO: feed real monthly counts once the backend exposes a
                        // time-bucketed series; these are the dashboard's demo values.
                        let trend = ChartSpec::anomaly_trend(
                            ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                                .map(String::from)
                                .to_vec(),
                            vec![12.0, 19.0, 3.0, 17.0, 6.0, 3.0],
                        );
                        let markers = anomaly_markers(&data.anomalies);
                        view! {
                            <div id="csv-metrics" class="metrics-grid">
                                <MetricCard
                                    value=metrics.total_rows.to_string()
                                    label="Total Rows"
                                />
                                <MetricCard
                                    value=metrics.anomalies_found.to_string()
                                    label="Anomalies Found"
                                />
                                <MetricCard
                                    value=format!("{}%", metrics.confidence_score)
                                    label="Confidence Score"
                                />
                            </div>
                            <div class="grid md:grid-cols-2 gap-6 mt-6">
                                <ChartCanvas
                                    id="anomaly-chart"
                                    spec=distribution
                                    backend=Rc::clone(&charts)
                                />
                                <ChartCanvas id="trend-chart" spec=trend backend=charts />
                            </div>
                            {(!markers.is_empty())
                                .then(|| view! { <MapCanvas markers=markers backend=map /> })}
                            <div id="anomalies-list" class="mt-6">
                                {data
                                    .anomalies
                                    .iter()
                                    .map(|anomaly| view! { <AnomalyCard anomaly=anomaly.clone() /> })
                                    .collect_view()}
                            </div>
                            <button class="btn mt-4" on:click=move |_| download_csv_report()>
                                "Download Report"
                            </button>
                        }
                    })
            }}
        </div>
    }
}

/// Markers for anomalies that carry coordinates; the rest are skipped.
fn anomaly_markers(anomalies: &[Anomaly]) -> Vec<GeoMarker> {
    anomalies
        .iter()
        .filter_map(|anomaly| {
            Some(GeoMarker::new(
                anomaly.latitude?,
                anomaly.longitude?,
                anomaly.severity,
                anomaly.kind.clone(),
            ))
        })
        .collect()
}
