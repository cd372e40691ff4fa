use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::dom::DocumentScroller;
use crate::nav::{Click, NavAnchor, Navigator};

/// Link that smooth-scrolls to a section instead of jumping.
///
/// For a plain click the default fragment navigation is suppressed, so a
/// section that is not on the page leaves the viewport and URL untouched.
/// Modified or middle clicks keep the browser's behaviour.
#[component]
pub fn NavLink(
    anchor: NavAnchor,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let click = Click {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        };
        if !click.is_plain() {
            return;
        }

        ev.prevent_default();
        Navigator::new(DocumentScroller).go(anchor);
    };

    view! {
        <a href=anchor.href() class=class on:click=on_click>
            { children() }
        </a>
    }
}

#[component]
pub fn NavBar(#[prop(into)] name: String) -> impl IntoView {
    let links = NavAnchor::ALL
        .into_iter()
        .map(|anchor| {
            view! {
                <NavLink
                    anchor
                    class="px-3 py-2 rounded uppercase text-sm tracking-wide hover:bg-white/10"
                >
                    { anchor.label() }
                </NavLink>
            }
        })
        .collect_view();

    view! {
        <header
            class="fixed top-0 inset-x-0 z-50 bg-primary text-white shadow"
            style="position:fixed;top:0;left:0;right:0;z-index:50;background:#1E3A8A;color:#fff;"
        >
            <div class="max-w-6xl mx-auto flex flex-wrap justify-between items-center px-6 py-3">
                <span class="text-xl font-semibold">{ name }</span>
                <nav class="flex flex-wrap gap-1" aria-label="Sections">
                    { links }
                </nav>
            </div>
        </header>
    }
}
