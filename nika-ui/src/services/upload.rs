// nika-ui/src/services/upload.rs
//!
//! XHR transport for analysis uploads.
//!
//! fetch has no upload progress events, so the transport stays on
//! XMLHttpRequest: the `progress` events on the upload stream drive the
//! area's progress bar. Validation (size cap, type checks) happens in
//! `nika_core::upload` before this module is reached.

use std::rc::Rc;

use nika_core::UploadKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FormData, HtmlInputElement, ProgressEvent, XmlHttpRequest};

const ERROR_HTTP: &str = "Upload failed. Please try again.";
const ERROR_NETWORK: &str = "Upload failed. Please check your connection.";

/// POST a validated file to the kind's endpoint.
///
/// `on_progress` receives 0–100 as the upload advances; `on_complete`
/// receives the raw response body on HTTP 200 or a user-facing error
/// message. The closures are handed to the browser for the lifetime of the
/// request.
pub fn send_upload(
    kind: UploadKind,
    file: &File,
    on_progress: impl Fn(f64) + 'static,
    on_complete: impl Fn(Result<String, String>) + 'static,
) -> Result<(), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob(kind.field_name(), file)?;
    if let Some(token) = csrf_token() {
        form.append_with_str("csrfmiddlewaretoken", &token)?;
    }

    let xhr = XmlHttpRequest::new()?;
    let on_complete: Rc<dyn Fn(Result<String, String>)> = Rc::new(on_complete);

    let progress_handler = Closure::wrap(Box::new(move |e: ProgressEvent| {
        if e.length_computable() && e.total() > 0.0 {
            on_progress(e.loaded() / e.total() * 100.0);
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    xhr.upload()?
        .add_event_listener_with_callback("progress", progress_handler.as_ref().unchecked_ref())?;
    progress_handler.forget();

    let xhr_done = xhr.clone();
    let complete = Rc::clone(&on_complete);
    let load_handler = Closure::wrap(Box::new(move |_: Event| {
        if xhr_done.status().unwrap_or(0) == 200 {
            let body = xhr_done.response_text().ok().flatten().unwrap_or_default();
            complete(Ok(body));
        } else {
            complete(Err(ERROR_HTTP.to_string()));
        }
    }) as Box<dyn FnMut(Event)>);
    xhr.add_event_listener_with_callback("load", load_handler.as_ref().unchecked_ref())?;
    load_handler.forget();

    let complete = Rc::clone(&on_complete);
    let error_handler = Closure::wrap(Box::new(move |_: Event| {
        complete(Err(ERROR_NETWORK.to_string()));
    }) as Box<dyn FnMut(Event)>);
    xhr.add_event_listener_with_callback("error", error_handler.as_ref().unchecked_ref())?;
    error_handler.forget();

    log::info!("Uploading {} to {}", kind.as_str(), kind.endpoint());
    xhr.open("POST", kind.endpoint())?;
    xhr.send_with_opt_form_data(Some(&form))?;
    Ok(())
}

/// CSRF token embedded by the backend's page template, when present.
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let input = document
        .query_selector("[name=csrfmiddlewaretoken]")
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Some(input.value())
}
