// nika-ui/src/services/charts.rs
//!
//! Chart rendering capability.
//!
//! The composition root injects a `ChartBackend` into the panels that draw
//! charts; `NullChartBackend` stands in where no drawing surface capability
//! exists, so callers never probe for a library at runtime.

use std::f64::consts::PI;

use nika_core::{ChartKind, ChartSpec};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::rendering::get_2d_context;

/// Renders a `ChartSpec` onto a canvas-like surface.
pub trait ChartBackend {
    fn render(&self, canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<(), JsValue>;
}

/// Fallback backend that draws nothing.
pub struct NullChartBackend;

impl ChartBackend for NullChartBackend {
    fn render(&self, _canvas: &HtmlCanvasElement, _spec: &ChartSpec) -> Result<(), JsValue> {
        Ok(())
    }
}

/// Native Canvas2D chart drawing, themed from the page's CSS variables.
pub struct CanvasChartBackend;

const DOUGHNUT_INNER_RATIO: f64 = 0.6;
const LINE_MARGIN: f64 = 32.0;
const GRID_LINES: u32 = 4;

impl ChartBackend for CanvasChartBackend {
    fn render(&self, canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<(), JsValue> {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        let ctx = get_2d_context(canvas)?;
        ctx.clear_rect(0.0, 0.0, width, height);

        match spec.kind {
            ChartKind::Doughnut => draw_doughnut(&ctx, spec, width, height),
            ChartKind::Line => draw_line(&ctx, spec, width, height),
        }
    }
}

fn draw_doughnut(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let total = spec.total();
    if total <= 0.0 {
        return Ok(());
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) * 0.85;
    let inner = outer * DOUGHNUT_INNER_RATIO;

    let mut start = -PI / 2.0;
    for (i, value) in spec.values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / total * 2.0 * PI;
        let end = start + sweep;

        ctx.begin_path();
        ctx.arc(cx, cy, outer, start, end)?;
        ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true)?;
        ctx.close_path();
        ctx.set_fill_style_str(spec.color_at(i));
        ctx.fill();

        start = end;
    }

    // Legend swatches under the ring
    let foreground = theme_color("--foreground", "#e6edf7");
    ctx.set_font("12px sans-serif");
    let mut x = LINE_MARGIN;
    let y = height - 10.0;
    for (i, label) in spec.labels.iter().enumerate() {
        ctx.set_fill_style_str(spec.color_at(i));
        ctx.fill_rect(x, y - 9.0, 10.0, 10.0);
        ctx.set_fill_style_str(&foreground);
        ctx.fill_text(label, x + 14.0, y)?;
        x += 14.0 + label.len() as f64 * 7.0 + 16.0;
    }

    Ok(())
}

fn draw_line(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    if spec.values.is_empty() {
        return Ok(());
    }

    let plot_width = width - 2.0 * LINE_MARGIN;
    let plot_height = height - 2.0 * LINE_MARGIN;
    let max = spec.max_value().max(1.0);
    let step = if spec.values.len() > 1 {
        plot_width / (spec.values.len() - 1) as f64
    } else {
        plot_width
    };

    let x_at = |i: usize| LINE_MARGIN + step * i as f64;
    let y_at = |v: f64| LINE_MARGIN + plot_height * (1.0 - v / max);

    // Horizontal grid
    let border = theme_color("--border", "#2a3441");
    ctx.set_stroke_style_str(&border);
    ctx.set_line_width(1.0);
    for g in 0..=GRID_LINES {
        let y = LINE_MARGIN + plot_height * g as f64 / GRID_LINES as f64;
        ctx.begin_path();
        ctx.move_to(LINE_MARGIN, y);
        ctx.line_to(width - LINE_MARGIN, y);
        ctx.stroke();
    }

    // Filled area under the series
    ctx.begin_path();
    ctx.move_to(x_at(0), y_at(spec.values[0]));
    for (i, value) in spec.values.iter().enumerate().skip(1) {
        ctx.line_to(x_at(i), y_at(*value));
    }
    ctx.line_to(x_at(spec.values.len() - 1), LINE_MARGIN + plot_height);
    ctx.line_to(x_at(0), LINE_MARGIN + plot_height);
    ctx.close_path();
    ctx.set_fill_style_str("rgba(99, 102, 241, 0.1)");
    ctx.fill();

    // Series line
    ctx.begin_path();
    ctx.move_to(x_at(0), y_at(spec.values[0]));
    for (i, value) in spec.values.iter().enumerate().skip(1) {
        ctx.line_to(x_at(i), y_at(*value));
    }
    ctx.set_stroke_style_str(spec.color_at(0));
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Axis labels
    let muted = theme_color("--muted-foreground", "#7f8ba0");
    ctx.set_fill_style_str(&muted);
    ctx.set_font("11px sans-serif");
    for (i, label) in spec.labels.iter().enumerate() {
        ctx.fill_text(label, x_at(i) - 8.0, height - LINE_MARGIN / 2.0)?;
    }

    Ok(())
}

/// Resolve a CSS custom property from the document element, with a
/// fallback for detached contexts.
fn theme_color(variable: &str, fallback: &str) -> String {
    let resolved = web_sys::window()
        .and_then(|w| {
            let root = w.document()?.document_element()?;
            w.get_computed_style(&root).ok()?
        })
        .and_then(|style| style.get_property_value(variable).ok())
        .map(|value| value.trim().to_string())
        .unwrap_or_default();

    if resolved.is_empty() {
        fallback.to_string()
    } else {
        resolved
    }
}
