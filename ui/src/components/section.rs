use leptos::html;
use leptos::prelude::*;
use leptos_use::use_element_visibility;

use crate::nav::NavAnchor;

fn fade_style(seen: bool) -> &'static str {
    if seen {
        "opacity:1;transform:none;transition:opacity 700ms ease-out,transform 700ms ease-out;"
    } else {
        "opacity:0;transform:translateY(1.5rem);transition:opacity 700ms ease-out,transform 700ms ease-out;"
    }
}

/// Anchored page section that fades in the first time it scrolls into view.
#[component]
pub fn Section(
    anchor: NavAnchor,
    #[prop(into)] title: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node: NodeRef<html::Section> = NodeRef::new();
    let visible = use_element_visibility(node);

    // latch: once shown, stay shown
    let seen = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() {
            seen.set(true);
        }
    });

    view! {
        <section
            id=anchor.target_id()
            node_ref=node
            class=format!("scroll-mt-20 {class}")
            style=move || fade_style(seen.get())
        >
            <h2 class="text-3xl font-bold mb-4">{ title }</h2>
            { children() }
        </section>
    }
}
