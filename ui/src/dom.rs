//! Browser-backed implementations of the scroll capabilities.

use std::rc::Rc;

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::nav::ScrollToTarget;
use crate::scroll::{ScrollGeometry, ScrollSource, Subscription};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

/// The top-level browsing context's vertical scroll.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

impl ScrollSource for WindowScroll {
    fn geometry(&self) -> ScrollGeometry {
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .window
            .document()
            .and_then(|d| d.body())
            .map(|b| b.scroll_height() as f64)
            .unwrap_or(0.0);

        ScrollGeometry { scroll_top, document_height, viewport_height }
    }

    fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Result<Subscription> {
        let cb = Closure::<dyn Fn()>::new(move || on_scroll());

        self.window
            .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add scroll listener: {e:?}"))?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            // cb must outlive the registration, so it is dropped only after removal
            let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            drop(cb);
        }))
    }
}

/// Smooth-scrolls the element with a given id to the top of the viewport.
#[derive(Clone, Copy, Default)]
pub struct DocumentScroller;

impl ScrollToTarget for DocumentScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}
