use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement};

use crate::dom_utils;
use crate::handlers::register::submit_registration;
use crate::models::Credentials;
use crate::network::ApiClient;
use crate::notice;
use crate::platform::PageContext;

const FORM_ID: &str = "registerForm";

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
                tracing::error!(error = ?e, "registration form is incomplete");
                return;
            }
        };
        let ctx = ctx.clone();
        let api = api.clone();
        let doc = doc.clone();
        spawn_local(async move {
            let outcome = submit_registration(&ctx, &api, credentials).await;
            let (kind, message) = outcome.notice();
            if let Err(e) = notice::show(&doc, kind, message) {
                tracing::error!(error = ?e, "failed to show registration notice");
            }
        });
    })?;

    Ok(true)
}

fn read_credentials(document: &Document) -> Result<Credentials, JsValue> {
    Ok(Credentials::new(
        dom_utils::input_value(document, "registerUsername")?,
        dom_utils::input_value(document, "registerPassword")?,
    ))
}
