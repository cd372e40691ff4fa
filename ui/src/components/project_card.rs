use leptos::prelude::*;

use crate::profile::ProjectEntry;

#[component]
pub fn ProjectCard(entry: ProjectEntry) -> impl IntoView {
    let label = entry.cta_label();

    view! {
        <article class="bg-white rounded-xl overflow-hidden shadow flex flex-col h-full transition hover:-translate-y-1 hover:shadow-lg">
            // a missing image falls back to the browser placeholder plus alt text
            <img src=entry.image alt=entry.title.clone() class="h-40 w-full object-cover"/>
            <div class="p-4 flex-grow">
                <h3 class="font-semibold text-lg mb-1">{ entry.title }</h3>
                <p class="text-sm">{ entry.description }</p>
            </div>
            <div class="p-4">
                <a
                    href=entry.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block w-full text-center bg-primary text-white uppercase text-sm font-medium px-4 py-2 rounded hover:brightness-110"
                >{ label }</a>
            </div>
        </article>
    }
}

/// One card per entry, in the order given.
#[component]
pub fn ProjectGrid(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
            { entries.into_iter().map(|entry| view! { <ProjectCard entry/> }).collect_view() }
        </div>
    }
}
