use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::nav_bar::NavBar;
use crate::components::progress_bar::{ScrollProgressBar, use_scroll_progress};
use crate::profile::PROFILE;
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // the only piece of mutable page state
    let progress = use_scroll_progress();

    view! {
      <Title text=PROFILE.name.clone()/>
      <Router>
        <div class="bg-background text-text font-sans min-h-screen">
          <ScrollProgressBar progress/>
          <NavBar name=PROFILE.name.clone()/>

          <main>
            <RoutesMenu/>
          </main>

          <footer class="bg-primary text-white text-center py-6">
            <p class="text-sm">{ PROFILE.footer.clone() }</p>
          </footer>
        </div>
      </Router>
    }
}
