use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::SignedCookieJar;

use auth::SessionId;

use super::removal_cookie;
use super::AppError;
use super::SESSION_COOKIE;
use crate::inbound::http::router::AppState;

/// Destroy the session and redirect to the login page.
///
/// Session teardown returns a `Result`; a failure (including an unknown
/// session id) surfaces as an error response instead of being swallowed.
/// A request without a session cookie just redirects.
#[utoipa::path(
    delete,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 303, description = "Session destroyed, redirected to /login"),
        (status = 500, description = "Session teardown failed")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let session_id: SessionId = cookie.value().parse()?;
        state.authenticator.logout(&session_id)?;
        tracing::info!(session_id = %session_id, "Session destroyed");
    }

    Ok((jar.remove(removal_cookie()), Redirect::to("/login")))
}
