mod storage;
mod theme;

pub use storage::{local_storage_get, local_storage_set};
pub use theme::use_theme;
