use serde::{Deserialize, Serialize};

/// A rectangular region of interest detected in an analyzed image.
///
/// All geometry is expressed in the source image's native pixel space
/// (the dimensions the image was encoded at, not its displayed size).
/// Zones are immutable for the lifetime of a page view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Zone {
    pub fn new(index: usize, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            index,
            x,
            y,
            width,
            height,
        }
    }

    /// Parse a zone from string-encoded data attributes.
    ///
    /// Non-numeric input parses to NaN rather than failing: degenerate
    /// rectangles silently draw nothing (canvas calls with NaN coordinates
    /// are no-ops), matching the dashboard's graceful-degradation policy.
    pub fn from_attr_strings(index: usize, x: &str, y: &str, width: &str, height: &str) -> Self {
        Self {
            index,
            x: parse_coord(x),
            y: parse_coord(y),
            width: parse_coord(width),
            height: parse_coord(height),
        }
    }

    /// The label drawn at the zone's top-left corner ("Zone 1" for index 0).
    pub fn label(&self) -> String {
        format!("Zone {}", self.index + 1)
    }

    /// True when every geometry field is a usable finite number.
    pub fn has_valid_geometry(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

fn parse_coord(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_attr_strings_parses_integer_geometry() {
        let zone = Zone::from_attr_strings(0, "100", "50", "200", "100");

        assert_eq!(zone.index, 0);
        assert_eq!(zone.x, 100.0);
        assert_eq!(zone.y, 50.0);
        assert_eq!(zone.width, 200.0);
        assert_eq!(zone.height, 100.0);
    }

    #[test]
    fn from_attr_strings_tolerates_whitespace() {
        let zone = Zone::from_attr_strings(1, " 12 ", "34", "56", "78");

        assert_eq!(zone.x, 12.0);
        assert_eq!(zone.y, 34.0);
    }

    #[test]
    fn malformed_attribute_parses_to_nan() {
        let zone = Zone::from_attr_strings(0, "not-a-number", "50", "200", "100");

        assert!(zone.x.is_nan());
        assert!(!zone.has_valid_geometry());
    }

    #[test]
    fn valid_geometry_is_recognized() {
        let zone = Zone::new(2, 10.0, 20.0, 30.0, 40.0);
        assert!(zone.has_valid_geometry());
    }

    #[test]
    fn label_is_one_based() {
        assert_eq!(Zone::new(0, 0.0, 0.0, 1.0, 1.0).label(), "Zone 1");
        assert_eq!(Zone::new(5, 0.0, 0.0, 1.0, 1.0).label(), "Zone 6");
    }

    #[test]
    fn serialization_roundtrip() {
        let original = Zone::new(3, 100.0, 50.0, 200.0, 100.0);

        let json = serde_json::to_string(&original).unwrap();
        let restored: Zone = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
