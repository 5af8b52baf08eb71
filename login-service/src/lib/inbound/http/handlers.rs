use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::SignedCookieJar;

use auth::SessionId;
use auth::SessionStore;

use super::views;

pub mod docs;
pub mod home;
pub mod login;
pub mod logout;
pub mod register;

/// Name of the signed cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "session_id";

/// Build the session cookie for a freshly established session.
pub(crate) fn session_cookie(session_id: &SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to clear the session identifier on logout.
pub(crate) fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Session id currently presented by the client, if the cookie parses.
pub(crate) fn presented_session(jar: &SignedCookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
}

/// Consume the pending flash message for the presented session, if any.
pub(crate) fn pending_flash(sessions: &SessionStore, jar: &SignedCookieJar) -> Option<String> {
    let session_id = presented_session(jar)?;
    sessions.take_flash(&session_id)
}

/// Redirect with a one-time flash message attached to the session.
///
/// Reuses the presented session when it still exists; otherwise creates an
/// anonymous one so the message survives the redirect.
pub(crate) fn flash_redirect(
    sessions: &SessionStore,
    jar: SignedCookieJar,
    message: &str,
    location: &str,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let session_id = presented_session(&jar)
        .filter(|id| sessions.contains(id))
        .unwrap_or_else(|| sessions.create());
    sessions.set_flash(&session_id, message)?;
    Ok((jar.add(session_cookie(&session_id)), Redirect::to(location)))
}

/// Failure that escapes the redirect-and-flash control flow.
///
/// Guard redirects and authentication failures never come through here;
/// this is for teardown and infrastructure errors only.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::error_page()),
        )
            .into_response()
    }
}
