//! dom_utils.rs – thin helper layer for repetitive DOM operations.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement, HtmlInputElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or(JsValue::from_str("no global `window` exists"))?
        .document()
        .ok_or(JsValue::from_str("should have a document on window"))
}

/// Look up an element by id and cast it, failing when it is missing or of a
/// different type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has an unexpected element type", id)))
}

/// Current value of `<input id="{id}">`.
pub fn input_value(document: &Document, id: &str) -> Result<String, JsValue> {
    Ok(element_by_id::<HtmlInputElement>(document, id)?.value())
}

/// All text `(name, value)` pairs of a form, in document order.
pub fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut fields = Vec::new();

    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(fields);
    };
    for entry in entries {
        let pair: js_sys::Array = entry?.dyn_into()?;
        // File inputs yield Blob values; only text fields are submitted.
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((key, value));
        }
    }
    Ok(fields)
}

/// Run `handler` on every submit of `form`, with the default navigation
/// suppressed. The listener lives as long as the page.
pub fn on_submit<F>(form: &HtmlFormElement, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn on_click<F>(target: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);

    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// `<p><b>{label}:</b> <span>{value}</span></p>`, values inserted as text.
pub fn labelled_paragraph(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let paragraph = document.create_element("p")?;
    set_labelled_text(document, &paragraph, label, value)?;
    Ok(paragraph)
}

/// Rewrite a paragraph built by [`labelled_paragraph`] in place.
pub fn set_labelled_text(
    document: &Document,
    paragraph: &Element,
    label: &str,
    value: &str,
) -> Result<(), JsValue> {
    paragraph.set_text_content(None);

    let bold = document.create_element("b")?;
    bold.set_text_content(Some(&format!("{}:", label)));
    paragraph.append_child(&bold)?;
    paragraph.append_child(&document.create_text_node(" "))?;

    let span = document.create_element("span")?;
    span.set_text_content(Some(value));
    paragraph.append_child(&span)?;
    Ok(())
}
