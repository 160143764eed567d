// nika-ui/src/components/upload_area.rs
//!
//! Drag-and-drop upload target with a progress bar.
//!
//! Validation runs before transport; a rejected file never leaves the
//! browser. Successful uploads hand the raw response body to the parent,
//! which owns parsing and tab switching.

use leptos::*;
use nika_core::{validate_upload, UploadKind};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};

use crate::components::AlertSink;
use crate::services::send_upload;

#[component]
pub fn UploadArea(
    kind: UploadKind,
    /// Called with (file name, raw response body) after an HTTP 200.
    #[prop(into)]
    on_uploaded: Callback<(String, String)>,
) -> impl IntoView {
    let sink = expect_context::<AlertSink>();
    let (dragover, set_dragover) = create_signal(false);
    let (progress, set_progress) = create_signal(0.0_f64);

    let handle_file = move |file: File| {
        if let Err(e) = validate_upload(kind, &file.name(), &file.type_(), file.size()) {
            sink.error(e.to_string());
            return;
        }

        set_progress.set(0.0);
        let file_name = file.name();
        let result = send_upload(
            kind,
            &file,
            move |percent| set_progress.set(percent),
            move |outcome| match outcome {
                Ok(body) => on_uploaded.call((file_name.clone(), body)),
                Err(message) => sink.error(message),
            },
        );

        if let Err(e) = result {
            log::warn!("Failed to start {} upload: {e:?}", kind.as_str());
            sink.error("Upload failed. Please try again.");
        }
    };

    let on_drop = move |e: DragEvent| {
        e.prevent_default();
        set_dragover.set(false);

        let Some(files) = e.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if let Some(file) = files.get(0) {
            handle_file(file);
        }
    };

    let on_change = move |e: web_sys::Event| {
        let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
    };

    let accept = match kind {
        UploadKind::Csv => ".csv",
        UploadKind::Image => "image/*",
    };
    let title = match kind {
        UploadKind::Csv => "Upload CSV Data",
        UploadKind::Image => "Upload Image",
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || dragover.get()
            data-file-type=kind.as_str()
            on:dragover=move |e: DragEvent| {
                e.prevent_default();
                set_dragover.set(true);
            }
            on:dragleave=move |_| set_dragover.set(false)
            on:drop=on_drop
        >
            <h3 class="card-title">{title}</h3>
            <p class="text-sm text-muted">"Drag a file here or browse"</p>
            <input type="file" accept=accept on:change=on_change />
            <div class="progress">
                <div
                    class="progress-bar"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
        </div>
    }
}
