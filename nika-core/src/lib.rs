pub mod chart;
pub mod display;
pub mod geo;
pub mod overlay_state;
pub mod palette;
pub mod results;
pub mod tabs;
pub mod theme;
pub mod upload;
pub mod zone;

pub use chart::{ChartKind, ChartSpec};
pub use display::{display_scale, project_zone, DisplayRect, SurfaceSize};
pub use geo::{GeoMarker, MapRegion};
pub use overlay_state::OverlayState;
pub use palette::{zone_color, zone_fill_color, ZONE_PALETTE};
pub use results::{
    Anomaly, BoundingBox, CsvAnalysis, CsvMetrics, ImageAnalysis, Severity, UploadResponse,
    ZoneRecord,
};
pub use tabs::{initial_tab, TabId};
pub use theme::Theme;
pub use upload::{validate_upload, UploadError, UploadKind, MAX_UPLOAD_BYTES};
pub use zone::Zone;
