use std::sync::Arc;

use auth::Authenticator;
use axum_extra::extract::cookie::Key;
use login_service::config::Config;
use login_service::domain::user::service::AuthService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::InMemoryCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "login-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    anyhow::ensure!(
        config.session.secret.len() >= 32,
        "session secret must be at least 32 bytes"
    );

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let cookie_key = Key::derive_from(config.session.secret.as_bytes());
    let credential_store = Arc::new(InMemoryCredentialStore::new());
    let authenticator = Arc::new(Authenticator::new());
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&credential_store),
        Arc::clone(&authenticator),
    ));

    let application = create_router(auth_service, authenticator, cookie_key);

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.http_port,
        "Http server listening"
    );
    tracing::info!("API docs available at /api-docs");

    axum::serve(listener, application).await?;

    Ok(())
}
