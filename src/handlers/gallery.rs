//! Character gallery: concurrent load of pictures + details, and the per-card
//! edit / delete actions.

use futures::future::join;

use super::require_token;
use crate::config::GalleryOptions;
use crate::constants::{MSG_CONFIRM_DELETE, MSG_DELETE_FAILED, MSG_UPDATE_FAILED};
use crate::error::ClientError;
use crate::models::CharacterUpdate;
use crate::network::ApiClient;
use crate::platform::PageContext;
use crate::utils::parse_leading_int;
use crate::view_model::{merge_cards, CharacterCard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryLoad {
    Ready(Vec<CharacterCard>),
    /// No token stored; redirected before any request.
    NotSignedIn,
    /// A 401 from either source; token cleared and redirected.
    SessionExpired,
    /// Any other failure; the grid shows the load error.
    Failed(ClientError),
}

/// Fetch both listings concurrently. Both requests always run to completion;
/// any failure fails the whole load and nothing is rendered from a lone
/// successful listing. A 401 from either side outranks other errors.
pub async fn fetch_cards(
    api: &ApiClient,
    token: &str,
    options: &GalleryOptions,
) -> Result<Vec<CharacterCard>, ClientError> {
    let pictures = api.list_character_pictures();
    let details = api.list_character_details(token, &options.details_path);
    let (pictures, details) = match join(pictures, details).await {
        (Ok(pictures), Ok(details)) => (pictures, details),
        (Err(ClientError::Unauthorized), _) | (_, Err(ClientError::Unauthorized)) => {
            return Err(ClientError::Unauthorized)
        }
        (Err(err), _) | (_, Err(err)) => return Err(err),
    };
    tracing::debug!(
        pictures = pictures.len(),
        details = details.len(),
        "gallery listings fetched"
    );
    Ok(merge_cards(pictures, details, options.join_policy))
}

pub async fn load_gallery(ctx: &PageContext, api: &ApiClient, options: &GalleryOptions) -> GalleryLoad {
    let Some(token) = require_token(ctx) else {
        return GalleryLoad::NotSignedIn;
    };

    match fetch_cards(api, &token, options).await {
        Ok(cards) => {
            tracing::info!(count = cards.len(), "gallery loaded");
            GalleryLoad::Ready(cards)
        }
        Err(ClientError::Unauthorized) => {
            tracing::warn!("gallery token rejected, returning to login");
            ctx.end_session();
            GalleryLoad::SessionExpired
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching characters");
            GalleryLoad::Failed(err)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Server accepted the change; the card to display from now on.
    Updated(CharacterCard),
    SessionExpired,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation.
    Cancelled,
    SessionExpired,
    Failed,
}

/// Ask for replacement values, each defaulting to the current one.
pub fn prompt_update(ctx: &PageContext, card: &CharacterCard) -> CharacterUpdate {
    let dialogs = &ctx.dialogs;
    let answer = |message: &str, current: Option<&str>| {
        dialogs
            .prompt(message, current.unwrap_or_default())
            .filter(|value| !value.is_empty())
    };

    let name = answer("Enter new name:", Some(&card.name));
    let age = answer("Enter new age:", card.age.map(|a| a.to_string()).as_deref());
    let role = answer("Enter new role:", card.role.as_deref());
    let house = answer("Enter new house:", card.house.as_deref());

    CharacterUpdate {
        name: name.unwrap_or_else(|| card.name.clone()),
        age: age.as_deref().and_then(parse_leading_int).or(card.age),
        role: role.or_else(|| card.role.clone()),
        house: house.or_else(|| card.house.clone()),
    }
}

pub async fn edit_character(ctx: &PageContext, api: &ApiClient, card: &CharacterCard) -> EditOutcome {
    let update = prompt_update(ctx, card);

    let Some(id) = card.id else {
        tracing::warn!(name = %card.name, "character has no identity, cannot update");
        ctx.dialogs.alert(MSG_UPDATE_FAILED);
        return EditOutcome::Failed;
    };
    let Some(token) = ctx.session.token() else {
        ctx.end_session();
        return EditOutcome::SessionExpired;
    };

    match api.update_character(&token, id, &update).await {
        Ok(response) => {
            tracing::info!(id, "character updated");
            if let Some(message) = response.message {
                ctx.dialogs.alert(&message);
            }
            let mut updated = card.clone();
            updated.apply_update(&update);
            EditOutcome::Updated(updated)
        }
        Err(ClientError::Unauthorized) => {
            ctx.end_session();
            EditOutcome::SessionExpired
        }
        Err(err) => {
            tracing::error!(id, error = %err, "error updating character");
            ctx.dialogs.alert(MSG_UPDATE_FAILED);
            EditOutcome::Failed
        }
    }
}

pub async fn delete_character(ctx: &PageContext, api: &ApiClient, card: &CharacterCard) -> DeleteOutcome {
    if !ctx.dialogs.confirm(MSG_CONFIRM_DELETE) {
        return DeleteOutcome::Cancelled;
    }

    let Some(id) = card.id else {
        tracing::warn!(name = %card.name, "character has no identity, cannot delete");
        ctx.dialogs.alert(MSG_DELETE_FAILED);
        return DeleteOutcome::Failed;
    };
    let Some(token) = ctx.session.token() else {
        ctx.end_session();
        return DeleteOutcome::SessionExpired;
    };

    match api.delete_character(&token, id).await {
        Ok(response) => {
            tracing::info!(id, "character deleted");
            if let Some(message) = response.message {
                ctx.dialogs.alert(&message);
            }
            DeleteOutcome::Deleted
        }
        Err(ClientError::Unauthorized) => {
            ctx.end_session();
            DeleteOutcome::SessionExpired
        }
        Err(err) => {
            tracing::error!(id, error = %err, "error deleting character");
            ctx.dialogs.alert(MSG_DELETE_FAILED);
            DeleteOutcome::Failed
        }
    }
}
