//! Page helpers for the Ocean's Market storefront, compiled to WebAssembly.
//!
//! The schedule, validation rules, link matching and palette are plain Rust
//! and build on any target; everything touching the DOM is `wasm32` only.

pub mod constants;
pub mod hours;
pub mod routes;
pub mod severity;
pub mod validation;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod currency;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod forms;
#[cfg(target_arch = "wasm32")]
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod notify;
#[cfg(target_arch = "wasm32")]
pub mod page;

#[cfg(target_arch = "wasm32")]
pub use api::{FormUtils, LoadingState, Navigation, OceanMarket};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
fn init_page() {
    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return;
    };
    page::init(&document);
    nav::init(&document);
    log::info!("page helpers ready");
}

/// Run `init_page` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
#[cfg(target_arch = "wasm32")]
fn init_when_ready() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() != "loading" {
        init_page();
        return Ok(());
    }
    dom::add_listener(&document, "DOMContentLoaded", |_ev: web_sys::Event| init_page())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("oceans-market-web starting");

    if let Err(e) = init_when_ready() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
