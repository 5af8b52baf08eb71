use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::FromRef;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::docs::openapi;
use super::handlers::docs::swagger_ui;
use super::handlers::home::home;
use super::handlers::login::login;
use super::handlers::login::show_login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::register::show_register;
use super::middleware::method_override;
use super::middleware::require_anonymous;
use super::middleware::require_authenticated;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::user::InMemoryCredentialStore;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryCredentialStore>>,
    pub authenticator: Arc<Authenticator>,
    pub cookie_key: Key,
}

// SignedCookieJar pulls its signing key out of the application state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn create_router(
    auth_service: Arc<AuthService<InMemoryCredentialStore>>,
    authenticator: Arc<Authenticator>,
    cookie_key: Key,
) -> Router {
    let state = AppState {
        auth_service,
        authenticator,
        cookie_key,
    };

    let protected_routes = Router::new()
        .route("/", get(home))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authenticated,
        ));

    let anonymous_routes = Router::new()
        .route("/login", get(show_login).post(login))
        .route("/register", get(show_register).post(register))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_anonymous,
        ));

    let docs_routes = Router::new()
        .route("/api-docs", get(swagger_ui))
        .route("/api-docs/openapi.json", get(openapi));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(protected_routes)
        .merge(anonymous_routes)
        .route("/logout", delete(logout))
        .merge(docs_routes)
        .layer(middleware::from_fn(method_override))
        .layer(trace_layer)
        .with_state(state)
}
