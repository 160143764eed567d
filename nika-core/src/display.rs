//! Source-space to display-space projection for zone rectangles.
//!
//! The overlay canvas's pixel buffer always matches the rendered size of the
//! image it covers, while zone geometry is expressed in the image's native
//! pixel space. Projection scales one into the other and must be recomputed
//! fresh from the current dimensions on every redraw, never cached across
//! resizes.

use crate::Zone;

/// Dimensions of a drawing surface in whole pixels.
///
/// Used both for the canvas pixel buffer and for the image's natural size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A zone rectangle projected into display (canvas) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale factors from source-image space to display space.
///
/// Unavailable (None) when either surface has zero area, which happens
/// before the image has decoded. Callers treat that as "draw nothing".
pub fn display_scale(natural: SurfaceSize, surface: SurfaceSize) -> Option<(f64, f64)> {
    if !natural.has_area() || !surface.has_area() {
        return None;
    }

    Some((
        surface.width as f64 / natural.width as f64,
        surface.height as f64 / natural.height as f64,
    ))
}

/// Project a zone's source-space rectangle onto the display surface.
pub fn project_zone(zone: &Zone, natural: SurfaceSize, surface: SurfaceSize) -> Option<DisplayRect> {
    let (scale_x, scale_y) = display_scale(natural, surface)?;

    Some(DisplayRect {
        x: zone.x * scale_x,
        y: zone.y * scale_y,
        width: zone.width * scale_x,
        height: zone.height * scale_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scale_is_ratio_of_surface_to_natural() {
        let natural = SurfaceSize::new(800, 600);
        let surface = SurfaceSize::new(400, 300);

        let (sx, sy) = display_scale(natural, surface).unwrap();

        assert_eq!(sx, 0.5);
        assert_eq!(sy, 0.5);
    }

    #[test]
    fn display_scale_handles_non_uniform_stretch() {
        let natural = SurfaceSize::new(1000, 500);
        let surface = SurfaceSize::new(500, 500);

        let (sx, sy) = display_scale(natural, surface).unwrap();

        assert_eq!(sx, 0.5);
        assert_eq!(sy, 1.0);
    }

    #[test]
    fn zero_natural_dimensions_make_scale_unavailable() {
        // Image not yet decoded reports naturalWidth/naturalHeight of 0.
        let natural = SurfaceSize::new(0, 0);
        let surface = SurfaceSize::new(400, 300);

        assert!(display_scale(natural, surface).is_none());
    }

    #[test]
    fn zero_surface_dimensions_make_scale_unavailable() {
        let natural = SurfaceSize::new(800, 600);
        let surface = SurfaceSize::new(0, 300);

        assert!(display_scale(natural, surface).is_none());
    }

    #[test]
    fn project_zone_scales_position_and_size() {
        let zone = Zone::new(0, 100.0, 50.0, 200.0, 100.0);
        let natural = SurfaceSize::new(800, 600);
        let surface = SurfaceSize::new(400, 300);

        let rect = project_zone(&zone, natural, surface).unwrap();

        assert_eq!(rect.x, 50.0);
        assert_eq!(rect.y, 25.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn project_zone_at_native_size_is_identity() {
        let zone = Zone::new(1, 10.0, 20.0, 30.0, 40.0);
        let size = SurfaceSize::new(640, 480);

        let rect = project_zone(&zone, size, size).unwrap();

        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 30.0);
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn projection_is_deterministic_across_repeated_calls() {
        // Redrawing twice with no state change must produce identical
        // rectangles.
        let zone = Zone::new(2, 33.0, 44.0, 55.0, 66.0);
        let natural = SurfaceSize::new(1024, 768);
        let surface = SurfaceSize::new(512, 256);

        let first = project_zone(&zone, natural, surface).unwrap();
        let second = project_zone(&zone, natural, surface).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nan_geometry_projects_to_nan_rect() {
        // Degenerate input stays degenerate; drawing such a rect is a no-op
        // in canvas semantics, so nothing renders and nothing crashes.
        let zone = Zone::from_attr_strings(0, "bogus", "50", "200", "100");
        let natural = SurfaceSize::new(800, 600);
        let surface = SurfaceSize::new(400, 300);

        let rect = project_zone(&zone, natural, surface).unwrap();

        assert!(rect.x.is_nan());
        assert_eq!(rect.y, 25.0);
    }
}
