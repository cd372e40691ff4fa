use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-6 pt-32 pb-16">
            <p class="text-xl mb-4">"404 – not found"</p>
            <a href="/" class="underline hover:text-primary">"Back to the portfolio"</a>
        </div>
    }
}
