//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI description of the
//! HTTP surface: the six form-and-redirect routes plus the session-cookie
//! security scheme. Served at `/api-docs` (Swagger UI) and
//! `/api-docs/openapi.json`.

use utoipa::openapi::security::ApiKey;
use utoipa::openapi::security::ApiKeyValue;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use crate::inbound::http::handlers::login::LoginForm;
use crate::inbound::http::handlers::register::RegisterForm;
use crate::inbound::http::handlers::SESSION_COOKIE;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE,
                "Signed session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the login service.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "login-service API",
        description = "Session-based registration, login, and logout with form-encoded bodies and redirect responses."
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::handlers::home::home,
        crate::inbound::http::handlers::login::show_login,
        crate::inbound::http::handlers::login::login,
        crate::inbound::http::handlers::register::show_register,
        crate::inbound::http::handlers::register::register,
        crate::inbound::http::handlers::logout::logout,
    ),
    components(schemas(LoginForm, RegisterForm)),
    tags(
        (name = "auth", description = "Registration, login, and logout"),
        (name = "pages", description = "Protected pages")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/login", "/register", "/logout"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_document_has_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components missing");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
