//! The HTTP seam. [`FetchTransport`] goes through `window.fetch`; tests plug
//! in a scripted transport instead.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    /// JSON text; sets `Content-Type: application/json` when present.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    /// Perform the request. Only transport-level failures are errors; any
    /// HTTP status comes back as a response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(ClientError::dom)?;
        if let Some(token) = &request.bearer {
            headers
                .append("Authorization", &format!("Bearer {}", token))
                .map_err(ClientError::dom)?;
        }
        if let Some(body) = &request.body {
            headers
                .append("Content-Type", "application/json")
                .map_err(ClientError::dom)?;
            opts.set_body(&JsValue::from_str(body));
        }
        opts.set_headers(&headers);

        let fetch_request =
            Request::new_with_str_and_init(&request.url, &opts).map_err(ClientError::dom)?;

        let window =
            web_sys::window().ok_or_else(|| ClientError::Dom("no global window exists".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(ClientError::network)?;
        let resp: Response = resp_value.dyn_into().map_err(ClientError::dom)?;

        let text = JsFuture::from(resp.text().map_err(ClientError::dom)?)
            .await
            .map_err(ClientError::network)?;

        Ok(HttpResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
