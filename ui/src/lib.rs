pub mod nav;
pub mod profile;
pub mod scroll;
pub mod typewriter;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod pages;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::mount::mount_to_body;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
