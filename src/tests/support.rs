//! Deterministic doubles for the capabilities a page controller uses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::network::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use crate::platform::{Dialogs, Navigator, PageContext};
use crate::session::MemorySession;

type Scripted = (String, Result<HttpResponse, ClientError>);

/// Transport answering from a script. Each entry is consumed by the first
/// request whose URL contains its pattern (`""` matches anything).
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Vec<Scripted>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.on_raw("", status, body);
    }

    pub fn on(&self, url_pattern: &str, status: u16, body: Value) {
        self.on_raw(url_pattern, status, &body.to_string());
    }

    pub fn on_raw(&self, url_pattern: &str, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push((url_pattern.to_string(), Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, url_pattern: &str, error: ClientError) {
        self.script
            .borrow_mut()
            .push((url_pattern.to_string(), Err(error)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.sent.borrow_mut().push(request.clone());
        let mut script = self.script.borrow_mut();
        match script
            .iter()
            .position(|(pattern, _)| request.url.contains(pattern.as_str()))
        {
            Some(index) => script.remove(index).1,
            None => Err(ClientError::Network(format!("no scripted response for {}", request.url))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay_ms: Option<u32>,
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    redirects: Rc<RefCell<Vec<Redirect>>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(Redirect {
            path: path.to_string(),
            delay_ms: None,
        });
    }

    fn redirect_after(&self, path: &str, delay_ms: u32) {
        self.redirects.borrow_mut().push(Redirect {
            path: path.to_string(),
            delay_ms: Some(delay_ms),
        });
    }
}

/// Dialogs answering from queued replies. Unscripted confirms answer `false`,
/// unscripted prompts are cancelled.
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    alerts: Rc<RefCell<Vec<String>>>,
    confirms: Rc<RefCell<VecDeque<bool>>>,
    prompts: Rc<RefCell<VecDeque<Option<String>>>>,
    prompted: Rc<RefCell<Vec<(String, String)>>>,
}

impl ScriptedDialogs {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }

    pub fn answer_prompt(&self, answer: Option<&str>) {
        self.prompts.borrow_mut().push_back(answer.map(str::to_string));
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// `(message, default)` of every prompt shown.
    pub fn prompted(&self) -> Vec<(String, String)> {
        self.prompted.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.prompted
            .borrow_mut()
            .push((message.to_string(), default.to_string()));
        self.prompts.borrow_mut().pop_front().flatten()
    }
}

/// A page context wired to doubles, with handles to inspect them.
pub struct Harness {
    pub ctx: PageContext,
    pub api: ApiClient,
    pub session: MemorySession,
    pub navigator: RecordingNavigator,
    pub dialogs: ScriptedDialogs,
    pub transport: MockTransport,
}

impl Harness {
    pub fn new(session: MemorySession) -> Self {
        let navigator = RecordingNavigator::default();
        let dialogs = ScriptedDialogs::default();
        let transport = MockTransport::new();
        let ctx = PageContext::new(
            Rc::new(session.clone()),
            Rc::new(navigator.clone()),
            Rc::new(dialogs.clone()),
        );
        let api = ApiClient::new(
            ApiConfig::new("http://api.test", "http://pictures.test"),
            Rc::new(transport.clone()),
        );
        Self {
            ctx,
            api,
            session,
            navigator,
            dialogs,
            transport,
        }
    }

    pub fn signed_in() -> Self {
        Self::new(MemorySession::with_token("t0k"))
    }

    pub fn signed_out() -> Self {
        Self::new(MemorySession::default())
    }

    pub fn redirect_paths(&self) -> Vec<String> {
        self.navigator
            .redirects()
            .into_iter()
            .map(|r| r.path)
            .collect()
    }
}
