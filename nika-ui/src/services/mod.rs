pub mod charts;
pub mod map;
pub mod report;
pub mod upload;

pub use charts::{CanvasChartBackend, ChartBackend, NullChartBackend};
pub use map::{CanvasMapBackend, MapBackend, NullMapBackend};
pub use upload::send_upload;
