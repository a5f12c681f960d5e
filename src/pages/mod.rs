// Page-level controllers. Each `mount` looks for its page root in the
// document and returns `Ok(false)` when this is not its page.

pub mod add_character;
pub mod gallery;
pub mod login;
pub mod register;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config;
use crate::network::ApiClient;
use crate::platform::PageContext;

/// Attach every controller whose page root is present.
pub fn mount_all(document: &Document) -> Result<(), JsValue> {
    let config = config::current();
    let ctx = PageContext::browser();
    let api = ApiClient::browser(config.api.clone());

    let mounted = [
        ("login", login::mount(document, ctx.clone(), api.clone())?),
        ("register", register::mount(document, ctx.clone(), api.clone())?),
        ("add_character", add_character::mount(document, ctx.clone(), api.clone())?),
        ("gallery", gallery::mount(document, ctx, api, config.gallery)?),
    ];

    let names: Vec<&str> = mounted
        .iter()
        .filter(|(_, found)| *found)
        .map(|(name, _)| *name)
        .collect();
    if names.is_empty() {
        tracing::debug!("no page controller matched this document");
    } else {
        tracing::info!(pages = ?names, "page controllers mounted");
    }
    Ok(())
}
