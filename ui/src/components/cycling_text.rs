use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::typewriter::{Typewriter, TypewriterConfig, drive, liveness};

const SR_ONLY: &str = "position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;";

/// Types, holds and deletes each word in turn, followed by a blinking cursor.
///
/// Screen readers get the full word list once instead of every keystroke.
#[component]
pub fn CyclingText(words: Vec<String>, config: TypewriterConfig) -> impl IntoView {
    let cursor = config.cursor.clone();
    let spoken = words.join(", ");
    let machine = Typewriter::new(&words, config);
    let text = RwSignal::new(machine.text());

    // timers stop once the owner drops the guard
    let (guard, alive) = liveness();
    _ = StoredValue::new_local(guard);

    if machine.first_delay().is_some() {
        spawn_local(drive(machine, alive, move |t| text.set(t), TimeoutFuture::new));
    }

    view! {
        <span class="sr-only" style=SR_ONLY>{ spoken }</span>
        <span aria-hidden="true">{ move || text.get() }</span>
        <span class="animate-pulse" aria-hidden="true">{ cursor }</span>
    }
}
