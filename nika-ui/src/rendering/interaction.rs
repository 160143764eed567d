// nika-ui/src/rendering/interaction.rs
//!
//! Binds zone-list gestures to overlay renderer calls.
//!
//! The visibility state machine lives in `nika_core::OverlayState`; this
//! controller is the adapter that applies each transition to both the
//! reactive signal (driving the toggle affordance) and the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use nika_core::OverlayState;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::rendering::ZoneOverlayRenderer;

const ZONE_ITEM_SELECTOR: &str = ".zone-item";
const HOVER_BACKGROUND: &str = "var(--muted)";

#[derive(Clone)]
pub struct ZoneInteractionController {
    renderer: Rc<RefCell<ZoneOverlayRenderer>>,
    state: RwSignal<OverlayState>,
}

impl ZoneInteractionController {
    pub fn new(renderer: Rc<RefCell<ZoneOverlayRenderer>>, state: RwSignal<OverlayState>) -> Self {
        Self { renderer, state }
    }

    pub fn state(&self) -> RwSignal<OverlayState> {
        self.state
    }

    /// Apply a state transition to the signal and the canvas together,
    /// keeping the toggle affordance and the drawn surface in step.
    pub fn apply(&self, next: OverlayState) {
        self.state.set(next);
        self.renderer.borrow_mut().set_visible(next.is_visible());
    }

    /// Explicit toggle action (the Show/Hide Overlay button).
    pub fn toggle(&self) {
        self.apply(self.state.get_untracked().toggled());
    }

    /// Hovering a list entry while the overlay is visible emphasizes the
    /// entry and redraws with that zone highlighted. No-op while hidden:
    /// hovering must not mutate the canvas.
    pub fn on_zone_hover(&self, index: usize) {
        if !self.state.get_untracked().is_visible() {
            return;
        }

        if let Some(item) = zone_list_item(index) {
            let _ = item.style().set_property("background-color", HOVER_BACKGROUND);
        }

        self.renderer.borrow().redraw(Some(index));
    }

    /// Clears the hover emphasis. No forced redraw: a repaint without a
    /// highlight is equivalent to the base state, so leaving the last frame
    /// in place is correct.
    pub fn on_zone_unhover(&self, index: usize) {
        if let Some(item) = zone_list_item(index) {
            let _ = item.style().remove_property("background-color");
        }
    }

    /// Clicking a list entry reveals the overlay when hidden (never hides
    /// it), then centers the entry in the viewport.
    pub fn on_zone_click(&self, index: usize) {
        let current = self.state.get_untracked();
        if !current.is_visible() {
            self.apply(current.revealed());
        }

        if let Some(item) = zone_list_item(index) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            item.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

fn zone_list_item(index: usize) -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    let items = document.query_selector_all(ZONE_ITEM_SELECTOR).ok()?;
    items.get(index as u32)?.dyn_into::<HtmlElement>().ok()
}
