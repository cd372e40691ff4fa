use std::rc::Rc;

use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::*;

use crate::dom::WindowScroll;
use crate::scroll::ScrollTracker;

/// Page scroll completion in `[0, 100]`, tracked for as long as the calling
/// owner is alive.
pub fn use_scroll_progress() -> ReadSignal<f64> {
    let progress = RwSignal::new(0.0);

    let tracker = WindowScroll::new()
        .and_then(|src| ScrollTracker::attach(Rc::new(src), move |pct| progress.set(pct)));

    match tracker {
        // dropped (and the listener removed) when the owner is disposed
        Ok(tracker) => _ = StoredValue::new_local(tracker),
        Err(e) => console_warn(&format!("scroll progress disabled: {e:#}")),
    }

    progress.read_only()
}

/// Properties the indicator cannot do without, independent of the stylesheet.
const BAR_STYLE: &str = "position:fixed;top:0;left:0;height:4px;background:#1E3A8A;z-index:2000;";

#[component]
pub fn ScrollProgressBar(progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="transition-[width] duration-75"
            style=move || format!("{BAR_STYLE}width:{:.2}%;", progress.get())
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get())
        ></div>
    }
}
