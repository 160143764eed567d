//! Serde models of the backend's analysis responses.
//!
//! Shapes follow the JSON the analysis backend returns for CSV and image
//! uploads. Fields the backend may omit default rather than fail: a partial
//! response renders a partial results panel, never an error page.

use crate::Zone;
use serde::{Deserialize, Serialize};

/// Envelope of every upload response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Anomaly severity reported by the backend.
///
/// Unrecognized values degrade to `Unknown` (rendered gray) instead of
/// failing the whole response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl Severity {
    /// Badge class for anomaly cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High | Self::Critical => "bg-red-500",
            Self::Medium => "bg-yellow-500",
            Self::Low => "bg-green-500",
            Self::Unknown => "bg-gray-500",
        }
    }

    /// Marker color for map overlays.
    pub fn marker_color(self) -> &'static str {
        match self {
            Self::High | Self::Critical => "#ef4444",
            Self::Medium => "#f59e0b",
            Self::Low => "#10b981",
            Self::Unknown => "#6b7280",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

// =============================================================================
// CSV analysis
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CsvMetrics {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub anomalies_found: u64,
    #[serde(default)]
    pub confidence_score: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub row: u64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CsvAnalysis {
    #[serde(default)]
    pub metrics: CsvMetrics,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
}

// =============================================================================
// Image analysis
// =============================================================================

/// Bounding box as the backend reports it, in source-image pixels.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub mineral_type: Option<String>,
    pub bounding_box: BoundingBox,
}

impl ZoneRecord {
    /// Lower the record to overlay geometry at its list position.
    pub fn to_zone(&self, index: usize) -> Zone {
        Zone::new(
            index,
            self.bounding_box.x,
            self.bounding_box.y,
            self.bounding_box.width,
            self.bounding_box.height,
        )
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub original_image: String,
    #[serde(default)]
    pub overlay_image: Option<String>,
    #[serde(default)]
    pub anomalies_detected: u32,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
}

impl ImageAnalysis {
    /// Overlay geometry for every reported zone, in list order.
    pub fn overlay_zones(&self) -> Vec<Zone> {
        self.zones
            .iter()
            .enumerate()
            .map(|(i, record)| record.to_zone(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_response_parses_backend_shape() {
        let json = r#"{
            "success": true,
            "data": {
                "metrics": {
                    "total_rows": 1200,
                    "anomalies_found": 7,
                    "confidence_score": 91.5
                },
                "anomalies": [
                    {
                        "type": "Statistical Outlier",
                        "severity": "High",
                        "description": "Value outside expected range",
                        "row": 42,
                        "confidence": 0.93
                    }
                ]
            }
        }"#;

        let response: UploadResponse<CsvAnalysis> = serde_json::from_str(json).unwrap();
        assert!(response.success);

        let data = response.data.unwrap();
        assert_eq!(data.metrics.total_rows, 1200);
        assert_eq!(data.anomalies.len(), 1);
        assert_eq!(data.anomalies[0].kind, "Statistical Outlier");
        assert_eq!(data.anomalies[0].severity, Severity::High);
    }

    #[test]
    fn failed_response_carries_error_message() {
        let json = r#"{"success": false, "error": "Unsupported encoding"}"#;

        let response: UploadResponse<CsvAnalysis> = serde_json::from_str(json).unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Unsupported encoding"));
        assert!(response.data.is_none());
    }

    #[test]
    fn unknown_severity_degrades_instead_of_failing() {
        let json = r#"{
            "type": "Trend Anomaly",
            "severity": "Catastrophic"
        }"#;

        let anomaly: Anomaly = serde_json::from_str(json).unwrap();

        assert_eq!(anomaly.severity, Severity::Unknown);
        assert_eq!(anomaly.severity.badge_class(), "bg-gray-500");
    }

    #[test]
    fn severity_colors_match_dashboard_palette() {
        assert_eq!(Severity::High.marker_color(), "#ef4444");
        assert_eq!(Severity::Medium.marker_color(), "#f59e0b");
        assert_eq!(Severity::Low.marker_color(), "#10b981");
        assert_eq!(Severity::Unknown.marker_color(), "#6b7280");
    }

    #[test]
    fn image_analysis_lowers_zone_records_to_overlay_geometry() {
        let json = r#"{
            "original_image": "/media/uploads/scan.png",
            "overlay_image": "/media/uploads/scan_overlay.png",
            "anomalies_detected": 2,
            "confidence_score": 88.0,
            "zones": [
                {
                    "id": "zone_1",
                    "name": "Anomaly Zone 1",
                    "confidence": 0.92,
                    "mineral_type": "Pyrite",
                    "bounding_box": {"x": 100, "y": 50, "width": 200, "height": 100}
                },
                {
                    "id": "zone_2",
                    "name": "Anomaly Zone 2",
                    "confidence": 0.81,
                    "mineral_type": "Quartz",
                    "bounding_box": {"x": 400, "y": 300, "width": 120, "height": 140}
                }
            ]
        }"#;

        let analysis: ImageAnalysis = serde_json::from_str(json).unwrap();
        let zones = analysis.overlay_zones();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].index, 0);
        assert_eq!(zones[0].x, 100.0);
        assert_eq!(zones[1].index, 1);
        assert_eq!(zones[1].width, 120.0);
    }

    #[test]
    fn missing_optional_image_fields_default() {
        let json = r#"{"original_image": "/media/uploads/scan.png"}"#;

        let analysis: ImageAnalysis = serde_json::from_str(json).unwrap();

        assert!(analysis.overlay_image.is_none());
        assert_eq!(analysis.anomalies_detected, 0);
        assert!(analysis.zones.is_empty());
    }
}
