//! # portfolio
//!
//! WASM behaviour layer for the static portfolio page: theme switch, mobile
//! navigation, project filter, contact form validation, and scroll
//! animations.
//!
//! Each unit keeps its decision logic in plain Rust so it runs under native
//! `cargo test`; the DOM wiring is compiled only with the `hydrate` feature.

pub mod app;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod storage;
pub mod styles;
pub mod theme;

/// WASM entry point, run by the generated JS glue when the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or_default();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("portfolio not started: {e}");
            return;
        }
    };
    if let Err(e) = styles::inject(&document) {
        log::warn!("animation styles not injected: {e}");
    }

    let ready_document = document.clone();
    let mounted = dom::on_dom_ready(&document, move || {
        let config = config::load(&ready_document);
        app::mount_all(&ready_document, &config);
    });
    if let Err(e) = mounted {
        log::warn!("portfolio not mounted: {e}");
    }
}
