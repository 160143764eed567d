//! Map marker model and the projection used to place markers on a canvas.

use crate::display::SurfaceSize;
use crate::results::Severity;

/// An anomaly location rendered as a circle marker.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoMarker {
    pub lat: f64,
    pub lng: f64,
    pub severity: Severity,
    pub label: String,
}

impl GeoMarker {
    pub fn new(lat: f64, lng: f64, severity: Severity, label: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            severity,
            label: label.into(),
        }
    }
}

/// Geographic bounding region shown by the map surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl MapRegion {
    /// Square region of `span` degrees centered on a point.
    pub fn around(center_lat: f64, center_lng: f64, span: f64) -> Self {
        let half = span / 2.0;
        Self {
            min_lat: center_lat - half,
            max_lat: center_lat + half,
            min_lng: center_lng - half,
            max_lng: center_lng + half,
        }
    }

    /// Smallest region containing all markers, padded by 10% per side.
    /// None when the marker list is empty.
    pub fn containing(markers: &[GeoMarker]) -> Option<Self> {
        let first = markers.first()?;
        let mut region = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };

        for marker in &markers[1..] {
            region.min_lat = region.min_lat.min(marker.lat);
            region.max_lat = region.max_lat.max(marker.lat);
            region.min_lng = region.min_lng.min(marker.lng);
            region.max_lng = region.max_lng.max(marker.lng);
        }

        let lat_pad = ((region.max_lat - region.min_lat) * 0.1).max(0.01);
        let lng_pad = ((region.max_lng - region.min_lng) * 0.1).max(0.01);
        region.min_lat -= lat_pad;
        region.max_lat += lat_pad;
        region.min_lng -= lng_pad;
        region.max_lng += lng_pad;

        Some(region)
    }

    /// Equirectangular projection of a coordinate onto the surface.
    ///
    /// Latitude grows upward while canvas y grows downward, so y is
    /// inverted. None when the region or surface has no extent.
    pub fn project(&self, lat: f64, lng: f64, surface: SurfaceSize) -> Option<(f64, f64)> {
        let lat_span = self.max_lat - self.min_lat;
        let lng_span = self.max_lng - self.min_lng;
        if lat_span <= 0.0 || lng_span <= 0.0 || !surface.has_area() {
            return None;
        }

        let x = (lng - self.min_lng) / lng_span * surface.width as f64;
        let y = (self.max_lat - lat) / lat_span * surface.height as f64;
        Some((x, y))
    }
}
