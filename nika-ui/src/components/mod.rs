pub mod alerts;
pub mod csv_results;
pub mod image_results;
pub mod tabs;
pub mod theme_toggle;
pub mod upload_area;
pub mod zone_overlay;

pub use alerts::{AlertSink, AlertStack};
pub use csv_results::CsvResultsPanel;
pub use image_results::ImageResultsPanel;
pub use tabs::{TabBar, TabPanel};
pub use theme_toggle::ThemeToggle;
pub use upload_area::UploadArea;
pub use zone_overlay::ZoneOverlayView;
