use crate::constants::{GALLERY_PAGE, MSG_LOGIN_FAILED};
use crate::error::ClientError;
use crate::models::{Credentials, LoginResponse};
use crate::network::ApiClient;
use crate::platform::PageContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored, navigating to the gallery.
    SignedIn,
    /// Server answered without a token; its message was shown.
    Rejected(String),
    Failed(ClientError),
}

/// Exchange credentials for a session token. Single attempt, no retry.
pub async fn submit_login(
    ctx: &PageContext,
    api: &ApiClient,
    credentials: Credentials,
) -> LoginOutcome {
    match api.login(&credentials).await {
        Ok(LoginResponse {
            token: Some(token), ..
        }) if !token.is_empty() => {
            tracing::info!(username = %credentials.username, "login succeeded");
            ctx.session.set_token(&token);
            ctx.navigator.redirect(GALLERY_PAGE);
            LoginOutcome::SignedIn
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| MSG_LOGIN_FAILED.to_string());
            tracing::info!(username = %credentials.username, %message, "login rejected");
            ctx.dialogs.alert(&message);
            LoginOutcome::Rejected(message)
        }
        Err(err) => {
            tracing::error!(error = %err, "error logging in");
            // Surface the raw body; it carries the backend's explanation.
            let text = match &err {
                ClientError::Status { body, .. } if !body.is_empty() => body.clone(),
                other => other.to_string(),
            };
            ctx.dialogs.alert(&text);
            LoginOutcome::Failed(err)
        }
    }
}

/// Explicit logout: forget the token and return to the login page.
pub fn logout(ctx: &PageContext) {
    tracing::info!("logging out");
    ctx.end_session();
}
