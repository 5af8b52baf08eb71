use axum::extract::Request;
use axum::extract::State;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum_extra::extract::SignedCookieJar;

use auth::SessionId;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::presented_session;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Extension type carrying the authenticated user through to the handler.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session_id: SessionId,
}

/// Resolve the presented session cookie to an authenticated user.
///
/// Deserialising a session means looking its user id back up in the
/// credential store on every request; a session whose user has vanished
/// degrades to anonymous.
async fn resolve_session(state: &AppState, jar: &SignedCookieJar) -> Option<CurrentUser> {
    let session_id = presented_session(jar)?;
    let user_id = state
        .authenticator
        .sessions()
        .authenticated_user(&session_id)?;
    let user = state
        .auth_service
        .find_user(&UserId::new(user_id))
        .await
        .ok()
        .flatten()?;
    Some(CurrentUser { user, session_id })
}

/// Guard for protected routes.
///
/// Authenticated requests proceed with a [`CurrentUser`] extension;
/// everything else is redirected to the login page. The redirect is
/// control flow, not an error.
pub async fn require_authenticated(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match resolve_session(&state, &jar).await {
        Some(current_user) => {
            req.extensions_mut().insert(current_user);
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Guard for anonymous-only routes (login and registration).
///
/// Authenticated requests are bounced back to the home page.
pub async fn require_anonymous(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    req: Request,
    next: Next,
) -> Response {
    if resolve_session(&state, &jar).await.is_some() {
        return Redirect::to("/").into_response();
    }
    next.run(req).await
}

/// Rewrite `POST /logout?_method=DELETE` into a real DELETE.
///
/// HTML forms can only submit GET and POST; this is the counterpart of the
/// original's method-override middleware.
pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        let overridden = req
            .uri()
            .query()
            .map(|query| query.split('&').any(|pair| pair == "_method=DELETE"))
            .unwrap_or(false);
        if overridden {
            *req.method_mut() = Method::DELETE;
        }
    }
    next.run(req).await
}
