use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement};

use crate::dom_utils;
use crate::handlers::login::submit_login;
use crate::models::Credentials;
use crate::network::ApiClient;
use crate::platform::PageContext;

const FORM_ID: &str = "loginForm";

pub fn mount(document: &Document, ctx: PageContext, api: ApiClient) -> Result<bool, JsValue> {
    if document.get_element_by_id(FORM_ID).is_none() {
        return Ok(false);
    }
    let form: HtmlFormElement = dom_utils::element_by_id(document, FORM_ID)?;

    let doc = document.clone();
    dom_utils::on_submit(&form, move || {
        let credentials = match read_credentials(&doc) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = ?e, "login form is incomplete");
                return;
            }
        };
        let ctx = ctx.clone();
        let api = api.clone();
        spawn_local(async move {
            submit_login(&ctx, &api, credentials).await;
        });
    })?;

    Ok(true)
}

fn read_credentials(document: &Document) -> Result<Credentials, JsValue> {
    Ok(Credentials::new(
        dom_utils::input_value(document, "loginUsername")?,
        dom_utils::input_value(document, "loginPassword")?,
    ))
}
