// nika-ui/src/services/report.rs
//!
//! PDF report downloads are plain navigations to the backend's report
//! endpoints; generation happens server-side.

use crate::config::DASHBOARD;

pub fn download_csv_report() {
    navigate(DASHBOARD.report_endpoint);
}

pub fn download_image_report() {
    navigate(DASHBOARD.image_report_endpoint);
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::warn!("Failed to navigate to {url}: {e:?}");
    }
}
