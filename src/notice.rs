//! Inline status notice used by the registration page.
//! At most one notice is in the document at any time.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const NOTICE_SELECTOR: &str = ".success-message, .error-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NoticeKind::Success => "success-message",
            NoticeKind::Error => "error-message",
        }
    }
}

/// Replace any visible notice with a new `<p>` appended to `<body>`.
pub fn show(document: &Document, kind: NoticeKind, message: &str) -> Result<Element, JsValue> {
    clear(document)?;

    let notice = document.create_element("p")?;
    notice.set_text_content(Some(message));
    notice.class_list().add_1(kind.class_name())?;

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;
    body.append_child(&notice)?;
    Ok(notice)
}

pub fn clear(document: &Document) -> Result<(), JsValue> {
    while let Some(existing) = document.query_selector(NOTICE_SELECTOR)? {
        existing.remove();
    }
    Ok(())
}
