use axum::extract::State;
use axum::response::Html;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;
use utoipa::ToSchema;

use super::flash_redirect;
use super::pending_flash;
use super::presented_session;
use super::session_cookie;
use super::AppError;
use axum_extra::extract::SignedCookieJar;

use crate::domain::user::models::Credentials;
use crate::inbound::http::router::AppState;
use crate::inbound::http::views;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;

/// Login form body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct LoginForm {
    email: String,
    password: String,
}

/// Render the login form.
#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    security(()),
    responses(
        (status = 200, description = "Login form, with any pending flash message", content_type = "text/html"),
        (status = 303, description = "Already authenticated; redirected to /")
    )
)]
pub async fn show_login(State(state): State<AppState>, jar: SignedCookieJar) -> Html<String> {
    let flash = pending_flash(state.authenticator.sessions(), &jar);
    Html(views::login_page(flash.as_deref()))
}

/// Verify credentials and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    security(()),
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Success: session cookie set, redirected to /. Failure: flash set, redirected back to /login")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match state.auth_service.login(credentials).await {
        Ok((user, session_id)) => {
            // Rotate away from any anonymous session that carried a flash
            if let Some(old_session) = presented_session(&jar) {
                if old_session != session_id {
                    if let Err(err) = state.authenticator.sessions().destroy(&old_session) {
                        tracing::debug!(error = %err, "Stale session already gone");
                    }
                }
            }

            tracing::info!(user_id = %user.id, "Login succeeded");
            Ok((jar.add(session_cookie(&session_id)), Redirect::to("/")))
        }
        Err(err @ (UserError::UserNotFound | UserError::IncorrectPassword)) => {
            tracing::info!(reason = %err, "Login rejected");
            flash_redirect(
                state.authenticator.sessions(),
                jar,
                &err.to_string(),
                "/login",
            )
        }
        Err(err) => Err(AppError::from(err)),
    }
}
