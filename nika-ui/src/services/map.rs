// nika-ui/src/services/map.rs
//!
//! Map marker rendering capability, same shape as the chart backend: the
//! composition root injects a `MapBackend`, with a null object standing in
//! when no surface capability exists.

use nika_core::{GeoMarker, MapRegion, SurfaceSize};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::DASHBOARD;
use crate::rendering::get_2d_context;

const MARKER_RADIUS: f64 = 8.0;
const MARKER_FILL_ALPHA: f64 = 0.7;

/// Renders anomaly markers onto a map surface.
pub trait MapBackend {
    fn render(&self, canvas: &HtmlCanvasElement, markers: &[GeoMarker]) -> Result<(), JsValue>;
}

/// Fallback backend that draws nothing.
pub struct NullMapBackend;

impl MapBackend for NullMapBackend {
    fn render(&self, _canvas: &HtmlCanvasElement, _markers: &[GeoMarker]) -> Result<(), JsValue> {
        Ok(())
    }
}

/// Equirectangular canvas map: severity-colored circle markers over a flat
/// graticule. Region fits the markers, falling back to the configured
/// default view when none carry coordinates.
pub struct CanvasMapBackend;

impl MapBackend for CanvasMapBackend {
    fn render(&self, canvas: &HtmlCanvasElement, markers: &[GeoMarker]) -> Result<(), JsValue> {
        let surface = SurfaceSize::new(canvas.width(), canvas.height());
        if !surface.has_area() {
            return Ok(());
        }

        let region = MapRegion::containing(markers).unwrap_or_else(|| {
            let (lat, lng) = DASHBOARD.map_default_center;
            MapRegion::around(lat, lng, DASHBOARD.map_default_span)
        });

        let ctx = get_2d_context(canvas)?;
        let width = surface.width as f64;
        let height = surface.height as f64;

        ctx.clear_rect(0.0, 0.0, width, height);

        // Graticule
        ctx.set_stroke_style_str("rgba(127, 139, 160, 0.25)");
        ctx.set_line_width(1.0);
        for step in 1..4 {
            let x = width * step as f64 / 4.0;
            let y = height * step as f64 / 4.0;
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, height);
            ctx.stroke();
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(width, y);
            ctx.stroke();
        }

        for marker in markers {
            let Some((x, y)) = region.project(marker.lat, marker.lng, surface) else {
                continue;
            };

            let color = marker.severity.marker_color();
            ctx.begin_path();
            ctx.arc(x, y, MARKER_RADIUS, 0.0, std::f64::consts::TAU)?;
            ctx.set_global_alpha(MARKER_FILL_ALPHA);
            ctx.set_fill_style_str(color);
            ctx.fill();
            ctx.set_global_alpha(1.0);
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(2.0);
            ctx.stroke();

            ctx.set_font("11px sans-serif");
            ctx.set_fill_style_str(color);
            ctx.fill_text(&marker.label, x + MARKER_RADIUS + 4.0, y + 4.0)?;
        }

        Ok(())
    }
}
