use std::rc::Rc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use common::nav::{SectionBox, anchor_scroll_top};

// thin, best-effort wrappers around web_sys
//
// the page has no error states, so a missing window or element is logged and
// otherwise ignored

pub fn window() -> Option<Window> {
    let window = web_sys::window();
    if window.is_none() {
        console_error!("no global window exists");
    }
    window
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn element(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn header_height() -> f64 {
    element("header")
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0)
}

// viewport-relative (top, bottom)
pub fn rect(id: &str) -> Option<(f64, f64)> {
    let rect = element(id)?.get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

// shared by the menu and the project modal, whoever writes last wins
pub fn set_body_scroll_lock(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        console_error!(format!("failed to set body overflow: {err:?}"));
    }
}

// every section with an id, in document order
pub fn measure_sections() -> Vec<SectionBox> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    let mut sections = Vec::new();
    for idx in 0..nodes.length() {
        let Some(section) = nodes.item(idx).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let id = section.id();
        let has_link = document
            .query_selector(&format!(".nav-link[href=\"#{id}\"]"))
            .ok()
            .flatten()
            .is_some();

        sections.push(SectionBox {
            id,
            offset_top: section.offset_top() as f64,
            height: section.offset_height() as f64,
            has_link,
        });
    }
    sections
}

pub fn smooth_scroll_to(id: &str) {
    let (Some(window), Some(target)) = (window(), element(id)) else {
        return;
    };

    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        header_height(),
    );

    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

// a window event listener that unregisters itself when dropped
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        if let Some(window) = window() {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                console_error!(format!("failed to listen for {event}: {err:?}"));
            }
        }

        WindowListener { event, callback }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

// keeps the listener alive for as long as the calling component is mounted
pub fn use_window_listener(event: &'static str, handler: impl FnMut(Event) + 'static) {
    use_hook(move || Rc::new(WindowListener::new(event, handler)));
}
