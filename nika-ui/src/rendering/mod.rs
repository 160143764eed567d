pub mod canvas_utils;
pub mod interaction;
pub mod overlay_renderer;

pub use canvas_utils::get_2d_context;
pub use interaction::ZoneInteractionController;
pub use overlay_renderer::ZoneOverlayRenderer;
