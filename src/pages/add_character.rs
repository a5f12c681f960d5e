use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement};

use crate::dom_utils;
use crate::handlers::add_character::{submit_character, CreateOutcome};
use crate::handlers::require_token;
use crate::network::ApiClient;
use crate::platform::PageContext;

const FORM_ID: &str = "character-form";

pub fn mount(document: &Document, ctx: PageContext, api: ApiClient) -> Result<bool, JsValue> {
    if document.get_element_by_id(FORM_ID).is_none() {
        return Ok(false);
    }
    if require_token(&ctx).is_none() {
        return Ok(true);
    }
    let form: HtmlFormElement = dom_utils::element_by_id(document, FORM_ID)?;

    let form_handle = form.clone();
    dom_utils::on_submit(&form, move || {
        let fields = match dom_utils::form_fields(&form_handle) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::error!(error = ?e, "could not read character form");
                return;
            }
        };
        let ctx = ctx.clone();
        let api = api.clone();
        let form = form_handle.clone();
        spawn_local(async move {
            if let CreateOutcome::Created(_) = submit_character(&ctx, &api, fields).await {
                form.reset();
            }
        });
    })?;

    Ok(true)
}
