use super::require_token;
use crate::constants::MSG_CHARACTER_ADDED;
use crate::error::ClientError;
use crate::models::{CharacterPayload, CharacterRecord};
use crate::network::ApiClient;
use crate::platform::PageContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Saved; the page should reset the form.
    Created(CharacterRecord),
    /// No token stored; redirected before any request.
    NotSignedIn,
    /// Token rejected; cleared and redirected.
    SessionExpired,
    /// Reported to the user; the form keeps its values.
    Failed(ClientError),
}

pub async fn submit_character<I, K, V>(ctx: &PageContext, api: &ApiClient, fields: I) -> CreateOutcome
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let Some(token) = require_token(ctx) else {
        return CreateOutcome::NotSignedIn;
    };

    let payload = CharacterPayload::from_form_fields(fields);
    tracing::debug!(?payload, "character data being sent");

    match api.create_character(&token, &payload).await {
        Ok(record) => {
            tracing::info!(id = ?record.id, "character added");
            ctx.dialogs.alert(MSG_CHARACTER_ADDED);
            CreateOutcome::Created(record)
        }
        Err(ClientError::Unauthorized) => {
            tracing::warn!("session expired while adding character");
            ctx.end_session();
            CreateOutcome::SessionExpired
        }
        Err(err) => {
            tracing::error!(error = %err, "error adding character");
            ctx.dialogs
                .alert(&format!("Error adding character: {}", err.user_message()));
            CreateOutcome::Failed(err)
        }
    }
}
