// nika-ui/src/rendering/overlay_renderer.rs
//!
//! Canvas overlay drawing anomaly zones over the analyzed image.
//!
//! The renderer owns the overlay canvas and its backing buffer; nothing else
//! writes to that context. Zone geometry arrives in the image's native pixel
//! space and is projected onto the current canvas size on every redraw, so
//! the drawn rectangles track the image through any number of responsive
//! resizes.

use nika_core::{display_scale, project_zone, zone_color, zone_fill_color, SurfaceSize, Zone};
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::rendering::get_2d_context;

const STROKE_WIDTH: f64 = 3.0;
const HIGHLIGHT_STROKE_WIDTH: f64 = 5.0;
const LABEL_FONT: &str = "14px -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";
const LABEL_INSET_X: f64 = 5.0;
const LABEL_INSET_Y: f64 = 20.0;

/// Renders the zone overlay for one image/canvas pair.
///
/// Every operation downgrades to a silent no-op while unattached, while the
/// image has not decoded (natural dimensions of zero), or while the canvas
/// has no area; the page may simply have no image-analysis results.
pub struct ZoneOverlayRenderer {
    image: Option<HtmlImageElement>,
    canvas: Option<HtmlCanvasElement>,
    zones: Vec<Zone>,
    visible: bool,
}

impl Default for ZoneOverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneOverlayRenderer {
    pub fn new() -> Self {
        Self {
            image: None,
            canvas: None,
            zones: Vec::new(),
            visible: false,
        }
    }

    /// Bind the renderer to an image/canvas pair and a fixed zone list for
    /// the current page view. No-op unless both elements are present.
    pub fn attach(
        &mut self,
        image: Option<HtmlImageElement>,
        canvas: Option<HtmlCanvasElement>,
        zones: Vec<Zone>,
    ) {
        let (Some(image), Some(canvas)) = (image, canvas) else {
            return;
        };

        self.image = Some(image);
        self.canvas = Some(canvas);
        self.zones = zones;
    }

    pub fn is_attached(&self) -> bool {
        self.image.is_some() && self.canvas.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Resize the canvas pixel buffer to the image's current rendered
    /// bounding box. Runs unconditionally on every window resize so the
    /// buffer is ready the next time visibility is toggled on; redraws
    /// immediately when the overlay is visible so it never shows stale
    /// geometry.
    pub fn resize(&mut self) {
        let (Some(image), Some(canvas)) = (&self.image, &self.canvas) else {
            return;
        };

        let rect = image.get_bounding_client_rect();
        canvas.set_width(rect.width() as u32);
        canvas.set_height(rect.height() as u32);

        if self.visible {
            self.redraw(None);
        }
    }

    /// Show or hide the overlay canvas. Transitioning to visible triggers a
    /// full redraw; the buffer may be stale after resizes that happened
    /// while hidden, which `resize` corrects on the next resize event.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;

        let Some(canvas) = &self.canvas else {
            return;
        };

        let display = if visible { "block" } else { "none" };
        let _ = canvas.style().set_property("display", display);

        if visible {
            self.redraw(None);
        }
    }

    /// Clear and repaint every zone: a 3px stroked rectangle, a
    /// semi-transparent fill, and a "Zone N" label inset at the top-left,
    /// colored deterministically from the fixed palette by `index % len`.
    ///
    /// The source-to-display transform is recomputed from the current
    /// canvas and natural-image dimensions on each call, never cached. The
    /// highlighted zone (hover) is drawn with a heavier stroke; its palette
    /// slot and fill are unchanged.
    pub fn redraw(&self, highlight: Option<usize>) {
        let (Some(image), Some(canvas)) = (&self.image, &self.canvas) else {
            return;
        };

        let natural = SurfaceSize::new(image.natural_width(), image.natural_height());
        let surface = SurfaceSize::new(canvas.width(), canvas.height());
        if display_scale(natural, surface).is_none() {
            return;
        }

        let Ok(ctx) = get_2d_context(canvas) else {
            return;
        };

        ctx.clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);

        for zone in &self.zones {
            let Some(rect) = project_zone(zone, natural, surface) else {
                continue;
            };

            let color = zone_color(zone.index);
            let width = if highlight == Some(zone.index) {
                HIGHLIGHT_STROKE_WIDTH
            } else {
                STROKE_WIDTH
            };

            ctx.set_stroke_style_str(color);
            ctx.set_line_width(width);
            ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);

            ctx.set_fill_style_str(&zone_fill_color(zone.index));
            ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

            ctx.set_fill_style_str(color);
            ctx.set_font(LABEL_FONT);
            let _ = ctx.fill_text(&zone.label(), rect.x + LABEL_INSET_X, rect.y + LABEL_INSET_Y);
        }
    }
}
