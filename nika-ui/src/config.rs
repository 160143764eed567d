//! Dashboard configuration registry.
//!
//! Endpoints and defaults that are not derived from backend data. Upload
//! endpoints live on `UploadKind` in `nika-core` next to their validation
//! rules; everything else is here.

/// Static configuration for the dashboard page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardConfig {
    /// localStorage key holding the persisted theme.
    pub theme_storage_key: &'static str,
    /// Backend endpoint producing the CSV analysis PDF.
    pub report_endpoint: &'static str,
    /// Backend endpoint producing the image analysis PDF.
    pub image_report_endpoint: &'static str,
    /// Map center used when no anomaly carries coordinates.
    pub map_default_center: (f64, f64),
    /// Width/height of the default map region in degrees.
    pub map_default_span: f64,
}

pub static DASHBOARD: DashboardConfig = DashboardConfig {
    theme_storage_key: "theme",
    report_endpoint: "/download-report/",
    image_report_endpoint: "/download-image-report/",
    map_default_center: (40.7128, -74.0060),
    map_default_span: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_endpoints_are_distinct() {
        assert_ne!(DASHBOARD.report_endpoint, DASHBOARD.image_report_endpoint);
    }

    #[test]
    fn default_map_region_has_extent() {
        assert!(DASHBOARD.map_default_span > 0.0);
    }
}
