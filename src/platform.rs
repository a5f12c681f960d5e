//! Browser capabilities the page controllers depend on: navigation and the
//! blocking `alert` / `confirm` / `prompt` dialogs.
//!
//! Both are traits so a flow can be driven by the real window or by a
//! deterministic double.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::session::{LocalStorageSession, SessionStore};

pub trait Navigator {
    /// Leave the current page for `path`.
    fn redirect(&self, path: &str);

    /// Leave the current page for `path` once `delay_ms` has elapsed.
    fn redirect_after(&self, path: &str, delay_ms: u32);
}

pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    /// `None` when the user cancels the prompt.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!(path, "no window, cannot navigate");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            tracing::error!(path, error = ?e, "navigation failed");
        }
    }

    fn redirect_after(&self, path: &str, delay_ms: u32) {
        let path = path.to_string();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            BrowserNavigator.redirect(&path);
        });
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }
}

/// Everything a page controller needs besides the API client.
#[derive(Clone)]
pub struct PageContext {
    pub session: Rc<dyn SessionStore>,
    pub navigator: Rc<dyn Navigator>,
    pub dialogs: Rc<dyn Dialogs>,
}

impl PageContext {
    pub fn new(
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        dialogs: Rc<dyn Dialogs>,
    ) -> Self {
        Self {
            session,
            navigator,
            dialogs,
        }
    }

    /// Context backed by the real window and `localStorage`.
    pub fn browser() -> Self {
        Self::new(
            Rc::new(LocalStorageSession),
            Rc::new(BrowserNavigator),
            Rc::new(BrowserDialogs),
        )
    }

    /// Drop the stored token and go back to the login page.
    pub fn end_session(&self) {
        self.session.clear();
        self.navigator.redirect(crate::constants::LOGIN_PAGE);
    }
}
