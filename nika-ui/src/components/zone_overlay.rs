// nika-ui/src/components/zone_overlay.rs
//!
//! The analyzed image with its zone overlay: canvas, toggle affordance and
//! the interactive zone list, wired to one renderer/controller pair.
//!
//! Zone geometry rides on the list items as string-encoded data attributes
//! (the page's embedded result data) and is parsed exactly once, at attach
//! time. The canvas buffer follows the image through load and window
//! resize events.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_use::{use_event_listener, use_window};
use nika_core::{ImageAnalysis, OverlayState, Zone};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlImageElement};

use crate::rendering::{ZoneInteractionController, ZoneOverlayRenderer};

#[component]
fn EyeIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7-10-7-10-7Z"/>
            <circle cx="12" cy="12" r="3"/>
        </svg>
    }
}

#[component]
fn EyeOffIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M9.88 9.88a3 3 0 1 0 4.24 4.24M6.61 6.61A13.5 13.5 0 0 0 2 12s3.5 7 10 7a9.74 9.74 0 0 0 5.39-1.61M14.12 5.12A9.77 9.77 0 0 1 22 12a13.16 13.16 0 0 1-1.67 2.68"/>
            <path d="m2 2 20 20"/>
        </svg>
    }
}

#[component]
pub fn ZoneOverlayView(analysis: ImageAnalysis) -> impl IntoView {
    let image_ref = create_node_ref::<html::Img>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let renderer = Rc::new(RefCell::new(ZoneOverlayRenderer::new()));
    let overlay_state = create_rw_signal(OverlayState::Hidden);
    let controller = ZoneInteractionController::new(Rc::clone(&renderer), overlay_state);

    // Attach once both elements are mounted. Resize runs immediately when
    // the image has already decoded, otherwise on its load event.
    let attach_renderer = Rc::clone(&renderer);
    create_effect(move |_| {
        let (Some(img), Some(canvas)) = (image_ref.get(), canvas_ref.get()) else {
            return;
        };
        let image = img.unchecked_ref::<HtmlImageElement>().clone();
        let canvas = canvas.unchecked_ref::<HtmlCanvasElement>().clone();

        attach_renderer
            .borrow_mut()
            .attach(Some(image.clone()), Some(canvas), zones_from_list_items());

        schedule_initial_resize(&image, Rc::clone(&attach_renderer));
    });

    // The buffer follows every window resize, visible or not, so toggling
    // on never reveals stale geometry.
    let resize_renderer = Rc::clone(&renderer);
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        resize_renderer.borrow_mut().resize();
    });

    let toggle_controller = controller.clone();
    let zones = analysis.overlay_zones();

    view! {
        <div class="card">
            <div class="card-header">
                <h4 class="card-title">"Original Image"</h4>
                <button
                    id="toggle-overlay"
                    class="btn btn-sm"
                    on:click=move |_| toggle_controller.toggle()
                >
                    {move || if overlay_state.get().is_visible() {
                        view! { <EyeOffIcon /> <span>"Hide Overlay"</span> }.into_view()
                    } else {
                        view! { <EyeIcon /> <span>"Show Overlay"</span> }.into_view()
                    }}
                </button>
            </div>
            <div class="card-content relative">
                <img
                    id="main-image"
                    class="w-full rounded"
                    src=analysis.original_image.clone()
                    alt="Original"
                    node_ref=image_ref
                />
                <canvas
                    id="anomaly-overlay"
                    class="absolute inset-0 pointer-events-none"
                    style="display: none;"
                    node_ref=canvas_ref
                ></canvas>
            </div>
            <ul id="zone-list" class="card-content divide-y">
                {zones
                    .iter()
                    .zip(&analysis.zones)
                    .map(|(zone, record)| {
                        let index = zone.index;
                        let hover = controller.clone();
                        let unhover = controller.clone();
                        let click = controller.clone();
                        view! {
                            <li
                                class="zone-item cursor-pointer p-2"
                                data-x=zone.x.to_string()
                                data-y=zone.y.to_string()
                                data-width=zone.width.to_string()
                                data-height=zone.height.to_string()
                                on:mouseenter=move |_| hover.on_zone_hover(index)
                                on:mouseleave=move |_| unhover.on_zone_unhover(index)
                                on:click=move |_| click.on_zone_click(index)
                            >
                                <div class="flex justify-between items-center">
                                    <span class="font-medium">{record.name.clone()}</span>
                                    <span class="text-sm text-muted">
                                        {record
                                            .mineral_type
                                            .clone()
                                            .unwrap_or_else(|| "Unclassified".to_string())}
                                    </span>
                                </div>
                                <div class="text-sm text-muted">
                                    {format!("Confidence: {:.0}%", record.confidence * 100.0)}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Size the canvas buffer now if the image has already decoded, otherwise
/// defer to its load event so the buffer picks up real dimensions.
fn schedule_initial_resize(image: &HtmlImageElement, renderer: Rc<RefCell<ZoneOverlayRenderer>>) {
    if image.complete() {
        renderer.borrow_mut().resize();
    } else {
        let handler = Closure::wrap(Box::new(move |_: Event| {
            renderer.borrow_mut().resize();
        }) as Box<dyn FnMut(Event)>);
        let _ = image.add_event_listener_with_callback("load", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

/// Parse the zone list items' data attributes into overlay geometry.
/// Missing or malformed attributes become NaN fields, which draw nothing.
fn zones_from_list_items() -> Vec<Zone> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(items) = document.query_selector_all(".zone-item") else {
        return Vec::new();
    };

    let mut zones = Vec::new();
    for index in 0..items.length() {
        let Some(element) = items
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let attr = |name: &str| element.get_attribute(name).unwrap_or_default();
        zones.push(Zone::from_attr_strings(
            index as usize,
            &attr("data-x"),
            &attr("data-y"),
            &attr("data-width"),
            &attr("data-height"),
        ));
    }
    zones
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlCanvasElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn resize_is_deferred_until_the_image_loads() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let image = document
            .create_element("img")
            .unwrap()
            .dyn_into::<HtmlImageElement>()
            .unwrap();
        let _ = image.style().set_property("width", "320px");
        let _ = image.style().set_property("height", "240px");
        // A pending (never-resolving) src keeps complete() false; an img
        // with src omitted entirely would report complete immediately.
        image.set_src("/test-fixtures/pending.png");
        body.append_child(&image).unwrap();

        let canvas = document
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(1);
        canvas.set_height(1);
        body.append_child(&canvas).unwrap();

        let renderer = Rc::new(RefCell::new(ZoneOverlayRenderer::new()));
        renderer
            .borrow_mut()
            .attach(Some(image.clone()), Some(canvas.clone()), Vec::new());

        // The fetch has not settled, so the resize must wait for the load
        // event instead of running here.
        assert!(!image.complete());
        schedule_initial_resize(&image, Rc::clone(&renderer));
        assert_eq!(canvas.width(), 1);

        // Dispatch runs the handler synchronously; the buffer then matches
        // the image's bounding box.
        let event = Event::new("load").unwrap();
        let _ = image.dispatch_event(&event);

        let rect = image.get_bounding_client_rect();
        assert_eq!(canvas.width(), rect.width() as u32);
        assert_eq!(canvas.height(), rect.height() as u32);
    }

    #[wasm_bindgen_test]
    fn list_items_with_data_attributes_become_zones() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let item = document.create_element("li").unwrap();
        item.set_class_name("zone-item");
        item.set_attribute("data-x", "100").unwrap();
        item.set_attribute("data-y", "50").unwrap();
        item.set_attribute("data-width", "200").unwrap();
        item.set_attribute("data-height", "100").unwrap();
        body.append_child(&item).unwrap();

        let zones = zones_from_list_items();
        let parsed = zones.iter().find(|z| z.x == 100.0 && z.y == 50.0);

        assert!(parsed.is_some());
        body.remove_child(&item).unwrap();
    }
}
