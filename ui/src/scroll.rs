use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;

/// Snapshot of the page's vertical scroll state, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { scroll_top, document_height, viewport_height }
    }

    /// Distance the page can actually travel.
    pub fn scrollable(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Completion percentage in `[0, 100]`.
    ///
    /// Pages that fit in the viewport (or report garbage geometry) read as 0
    /// instead of NaN/inf. Overscroll past either end is clamped.
    pub fn progress(&self) -> f64 {
        let range = self.scrollable();
        if range.is_nan() || range <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }

        let pct = (self.scroll_top / range) * 100.0;
        if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 }
    }
}

/// Releases a listener registration when dropped.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Something that scrolls vertically and can tell us about it.
pub trait ScrollSource {
    fn geometry(&self) -> ScrollGeometry;

    /// Registers `on_scroll` for scroll events until the returned
    /// subscription is dropped.
    fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Result<Subscription>;
}

/// Keeps a progress cell in sync with a [`ScrollSource`].
///
/// The listener lives exactly as long as the tracker.
pub struct ScrollTracker {
    _subscription: Subscription,
}

impl ScrollTracker {
    pub fn attach<S, F>(source: Rc<S>, on_progress: F) -> Result<Self>
    where
        S: ScrollSource + 'static,
        F: Fn(f64) + 'static,
    {
        // initial value so a page restored mid-scroll is correct before the first event
        let initial = source.geometry().progress();
        on_progress(initial);

        let last = Cell::new(initial);
        let src = source.clone();
        let handler: Rc<dyn Fn()> = Rc::new(move || {
            let pct = src.geometry().progress();
            if last.get() != pct {
                last.set(pct);
                on_progress(pct);
            }
        });

        let subscription = source.subscribe(handler)?;
        Ok(Self { _subscription: subscription })
    }
}
