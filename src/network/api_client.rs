use std::rc::Rc;

use crate::config::ApiConfig;
use crate::constants::{CHARACTERS_PATH, LOGIN_PATH, PICTURES_PATH, REGISTER_PATH};
use crate::error::ClientError;
use crate::models::{
    CharacterPayload, CharacterPicture, CharacterRecord, CharacterUpdate, Credentials,
    LoginResponse, MessageResponse,
};

use super::transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method};

/// Whether a 401 on this request means the stored session is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionBound {
    Yes,
    No,
}

// REST client for the auth/character API and the pictures service
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Client talking to the real backends through `window.fetch`.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Rc::new(FetchTransport))
    }

    // -------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------

    /// POST /api/login. A non-2xx answer is returned as
    /// [`ClientError::Status`] carrying the raw body.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let request = HttpRequest::new(Method::Post, self.config.api_url(LOGIN_PATH))
            .with_json(serde_json::to_string(credentials)?);
        let response = self.send_checked(request, SessionBound::No).await?;
        response.json()
    }

    /// POST /api/register. The body is decoded whatever the status, the
    /// outcome is carried by its `message`.
    pub async fn register(&self, credentials: &Credentials) -> Result<MessageResponse, ClientError> {
        let request = HttpRequest::new(Method::Post, self.config.api_url(REGISTER_PATH))
            .with_json(serde_json::to_string(credentials)?);
        let response = self.send(request).await?;
        response.json()
    }

    // -------------------------------------------------------------------
    // Characters
    // -------------------------------------------------------------------

    pub async fn create_character(
        &self,
        token: &str,
        payload: &CharacterPayload,
    ) -> Result<CharacterRecord, ClientError> {
        let request = HttpRequest::new(Method::Post, self.config.api_url(CHARACTERS_PATH))
            .with_bearer(token)
            .with_json(payload.to_json()?);
        let response = self.send_checked(request, SessionBound::Yes).await?;
        response.json()
    }

    /// Authenticated details listing (`/api/all_characters` by default).
    pub async fn list_character_details(
        &self,
        token: &str,
        path: &str,
    ) -> Result<Vec<CharacterRecord>, ClientError> {
        let request = HttpRequest::get(self.config.api_url(path)).with_bearer(token);
        let response = self.send_checked(request, SessionBound::Yes).await?;
        response.json()
    }

    /// Unauthenticated pictures listing. A 401 here still ends the session:
    /// the gallery treats an auth failure from either source the same way.
    pub async fn list_character_pictures(&self) -> Result<Vec<CharacterPicture>, ClientError> {
        let request = HttpRequest::get(self.config.pictures_url(PICTURES_PATH));
        let response = self.send_checked(request, SessionBound::Yes).await?;
        response.json()
    }

    pub async fn update_character(
        &self,
        token: &str,
        id: u64,
        update: &CharacterUpdate,
    ) -> Result<MessageResponse, ClientError> {
        let request = HttpRequest::new(Method::Put, self.character_url(id))
            .with_bearer(token)
            .with_json(serde_json::to_string(update)?);
        let response = self.send_checked(request, SessionBound::Yes).await?;
        response.json()
    }

    pub async fn delete_character(&self, token: &str, id: u64) -> Result<MessageResponse, ClientError> {
        let request = HttpRequest::new(Method::Delete, self.character_url(id)).with_bearer(token);
        let response = self.send_checked(request, SessionBound::Yes).await?;
        response.json()
    }

    fn character_url(&self, id: u64) -> String {
        self.config.api_url(&format!("{}/{}", CHARACTERS_PATH, id))
    }

    // Helper: send and log, no status interpretation
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        tracing::debug!(method, %url, "api request");

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(method, %url, status = response.status, "api response");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(method, %url, error = %e, "api request failed");
                Err(e)
            }
        }
    }

    // Helper: send and turn non-2xx into errors
    async fn send_checked(
        &self,
        request: HttpRequest,
        session: SessionBound,
    ) -> Result<HttpResponse, ClientError> {
        let response = self.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 && session == SessionBound::Yes {
            return Err(ClientError::Unauthorized);
        }
        Err(ClientError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{json, Value};

    use super::*;
    use crate::tests::support::MockTransport;

    fn client(transport: &MockTransport) -> ApiClient {
        ApiClient::new(
            ApiConfig::new("http://api.test", "http://pictures.test"),
            Rc::new(transport.clone()),
        )
    }

    #[test]
    fn login_posts_credentials_without_auth() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "token": "jwt" }));

        let response = block_on(client(&transport).login(&Credentials::new("jon", "ghost"))).unwrap();
        assert_eq!(response.token.as_deref(), Some("jwt"));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://api.test/api/login");
        assert_eq!(sent[0].bearer, None);
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "username": "jon", "password": "ghost" }));
    }

    #[test]
    fn login_401_is_a_status_error_not_a_session_expiry() {
        let transport = MockTransport::new();
        transport.respond_raw(401, r#"{"message": "Invalid username or password"}"#);

        let err = block_on(client(&transport).login(&Credentials::new("jon", "bad"))).unwrap_err();
        assert_eq!(
            err,
            ClientError::Status {
                status: 401,
                body: r#"{"message": "Invalid username or password"}"#.into()
            }
        );
    }

    #[test]
    fn register_decodes_error_statuses() {
        let transport = MockTransport::new();
        transport.respond(400, json!({ "message": "Username already exists." }));

        let response = block_on(client(&transport).register(&Credentials::new("arya", "needle"))).unwrap();
        assert_eq!(response.message.as_deref(), Some("Username already exists."));
    }

    #[test]
    fn authenticated_calls_carry_bearer_and_map_401() {
        let transport = MockTransport::new();
        transport.respond(401, json!({ "message": "Token has expired" }));

        let err = block_on(client(&transport).list_character_details("t0k", "/api/all_characters"))
            .unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://api.test/api/all_characters");
        assert_eq!(sent[0].bearer.as_deref(), Some("t0k"));
    }

    #[test]
    fn pictures_come_from_the_pictures_service() {
        let transport = MockTransport::new();
        transport.respond(200, json!([{ "name": "A", "imageUrl": "x" }]));

        let pictures = block_on(client(&transport).list_character_pictures()).unwrap();
        assert_eq!(pictures[0].name.as_deref(), Some("A"));

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://pictures.test/api/characters/pictures");
        assert_eq!(sent[0].bearer, None);
    }

    #[test]
    fn update_and_delete_target_the_character_id() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "message": "updated" }));
        transport.respond(200, json!({ "message": "deleted" }));

        let api = client(&transport);
        let update = CharacterUpdate {
            name: "Tyrion".into(),
            age: Some(39),
            role: None,
            house: Some("Lannister".into()),
        };
        block_on(api.update_character("t", 12, &update)).unwrap();
        block_on(api.delete_character("t", 12)).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "http://api.test/api/characters/12");
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, "http://api.test/api/characters/12");
        assert_eq!(sent[1].body, None);
    }

    #[test]
    fn server_errors_keep_status_and_body() {
        let transport = MockTransport::new();
        transport.respond_raw(500, "boom");

        let err = block_on(client(&transport).delete_character("t", 1)).unwrap_err();
        assert_eq!(err, ClientError::Status { status: 500, body: "boom".into() });
    }
}
