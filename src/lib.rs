use wasm_bindgen::prelude::*;

pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod handlers;
pub mod models;
pub mod network;
pub mod notice;
pub mod pages;
pub mod platform;
pub mod session;
pub mod utils;
pub mod view_model;

#[cfg(test)]
mod tests;

pub use error::ClientError;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(e) = config::load_from_window() {
        tracing::warn!(error = ?e, "invalid runtime client config, using build defaults");
    }

    let document = dom_utils::document()?;
    pages::mount_all(&document)
}
