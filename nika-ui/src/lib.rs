pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod rendering;
pub mod services;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
