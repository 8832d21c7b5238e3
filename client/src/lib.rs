//! # client
//!
//! Leptos + WASM front end for the project board.
//!
//! This crate renders the input form and the two status lists, wires browser
//! events (submit, drag and drop) to the `projects` controllers, and mounts
//! the board into its host element. All board logic lives in `projects`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the board into its host.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = util::config::load();
    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(&config.host_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(host) = host else {
        log::error!("board host element #{} not found; nothing mounted", config.host_id);
        return;
    };

    leptos::mount::mount_to(host, move || view! { <App config=config/> }).forget();
}
