#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use ui::nav::ScrollToTarget;
use ui::scroll::{ScrollGeometry, ScrollSource, Subscription};

type Listeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

/// A page with fixed section offsets that scrolls instantly.
#[derive(Default)]
pub struct FakePage {
    pub document_height: f64,
    pub viewport_height: f64,
    pub sections: HashMap<String, f64>,
    scroll_top: Cell<f64>,
    listeners: Listeners,
    next_id: Cell<usize>,
}

impl FakePage {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        Self { document_height, viewport_height, ..Default::default() }
    }

    pub fn with_section(mut self, id: &str, top: f64) -> Self {
        self.sections.insert(id.to_owned(), top);
        self
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    /// Moves the viewport and fires a scroll event, like the user would.
    pub fn user_scroll(&self, top: f64) {
        self.scroll_top.set(top);
        self.fire_scroll();
    }

    /// Fires a scroll event without moving.
    pub fn fire_scroll(&self) {
        let snapshot: Vec<_> = self.listeners.borrow().iter().map(|(_, f)| f.clone()).collect();
        for f in snapshot {
            f();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollSource for FakePage {
    fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry::new(self.scroll_top.get(), self.document_height, self.viewport_height)
    }

    fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Result<Subscription> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_scroll));

        let listeners = Rc::downgrade(&self.listeners);
        Ok(Subscription::new(move || {
            if let Some(l) = listeners.upgrade() {
                l.borrow_mut().retain(|(i, _)| *i != id);
            }
        }))
    }
}

impl ScrollToTarget for FakePage {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(top) = self.sections.get(id) else {
            return false;
        };
        // aligning the section with the viewport top, capped at the page end
        let max = (self.document_height - self.viewport_height).max(0.0);
        self.user_scroll(top.min(max));
        true
    }
}
