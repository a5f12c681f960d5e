// Page flows. Each one runs against injected capabilities and reports what
// happened; the DOM glue in `pages` decides how to reflect the outcome.

pub mod add_character;
pub mod gallery;
pub mod login;
pub mod register;

use crate::constants::LOGIN_PAGE;
use crate::platform::PageContext;

/// The stored token, or a redirect to the login page when there is none.
pub fn require_token(ctx: &PageContext) -> Option<String> {
    let token = ctx.session.token();
    if token.is_none() {
        tracing::info!("no session token, redirecting to login");
        ctx.navigator.redirect(LOGIN_PAGE);
    }
    token
}
