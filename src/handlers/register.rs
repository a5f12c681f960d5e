use crate::constants::{
    LOGIN_PAGE, MSG_REGISTER_FAILED, MSG_REGISTER_SUCCESS, REGISTER_REDIRECT_DELAY_MS,
    REGISTER_SUCCESS_MESSAGE,
};
use crate::error::ClientError;
use crate::models::Credentials;
use crate::network::ApiClient;
use crate::notice::NoticeKind;
use crate::platform::PageContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Redirect to the login page is scheduled.
    Registered,
    /// Any server message other than the success literal.
    Rejected(String),
    Failed(ClientError),
}

impl RegisterOutcome {
    /// The notice the page shows for this outcome.
    pub fn notice(&self) -> (NoticeKind, &str) {
        match self {
            Self::Registered => (NoticeKind::Success, MSG_REGISTER_SUCCESS),
            Self::Rejected(message) => (NoticeKind::Error, message.as_str()),
            Self::Failed(_) => (NoticeKind::Error, MSG_REGISTER_FAILED),
        }
    }
}

pub async fn submit_registration(
    ctx: &PageContext,
    api: &ApiClient,
    credentials: Credentials,
) -> RegisterOutcome {
    match api.register(&credentials).await {
        Ok(response) if response.message.as_deref() == Some(REGISTER_SUCCESS_MESSAGE) => {
            tracing::info!(username = %credentials.username, "registration succeeded");
            ctx.navigator
                .redirect_after(LOGIN_PAGE, REGISTER_REDIRECT_DELAY_MS);
            RegisterOutcome::Registered
        }
        Ok(response) => {
            let message = response.message.unwrap_or_default();
            tracing::info!(username = %credentials.username, %message, "registration rejected");
            RegisterOutcome::Rejected(message)
        }
        Err(err) => {
            tracing::error!(error = %err, "error registering");
            RegisterOutcome::Failed(err)
        }
    }
}
