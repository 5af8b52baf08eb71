use axum::extract::State;
use axum::response::Html;
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use utoipa::ToSchema;

use super::flash_redirect;
use super::pending_flash;
use super::AppError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::views;
use crate::user::errors::EmailError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;

/// Registration form body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RegisterForm {
    name: String,
    email: String,
    password: String,
}

impl RegisterForm {
    fn try_into_command(self) -> Result<RegisterUserCommand, EmailError> {
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterUserCommand::new(self.name, email, self.password))
    }
}

/// Render the registration form.
#[utoipa::path(
    get,
    path = "/register",
    tag = "auth",
    security(()),
    responses(
        (status = 200, description = "Registration form, with any pending flash message", content_type = "text/html"),
        (status = 303, description = "Already authenticated; redirected to /")
    )
)]
pub async fn show_register(State(state): State<AppState>, jar: SignedCookieJar) -> Html<String> {
    let flash = pending_flash(state.authenticator.sessions(), &jar);
    Html(views::register_page(flash.as_deref()))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    security(()),
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Success: redirected to /login. Failure: redirected back to /register")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let command = match form.try_into_command() {
        Ok(command) => command,
        Err(err) => {
            tracing::info!(reason = %err, "Registration rejected");
            return flash_redirect(
                state.authenticator.sessions(),
                jar,
                &err.to_string(),
                "/register",
            );
        }
    };

    match state.auth_service.register(command).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, email = %user.email, "User registered");
            Ok((jar, Redirect::to("/login")))
        }
        Err(err @ UserError::EmailAlreadyExists(_)) => {
            tracing::info!(reason = %err, "Registration rejected");
            flash_redirect(
                state.authenticator.sessions(),
                jar,
                &err.to_string(),
                "/register",
            )
        }
        Err(err) => {
            // Hashing or storage failure: the original redirects without a
            // message; the error still lands in the log
            tracing::error!(error = %err, "Registration failed");
            Ok((jar, Redirect::to("/register")))
        }
    }
}
