use std::sync::Arc;

use auth::Authenticator;
use axum_extra::extract::cookie::Key;
use login_service::domain::user::service::AuthService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::InMemoryCredentialStore;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let credential_store = Arc::new(InMemoryCredentialStore::new());
        let authenticator = Arc::new(Authenticator::new());
        let auth_service = Arc::new(AuthService::new(credential_store, Arc::clone(&authenticator)));

        let cookie_key = Key::derive_from(b"test-secret-key-for-cookie-signing-at-least-32-bytes");
        let router = create_router(auth_service, authenticator, cookie_key);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            // Keep cookies, but never follow redirects: the tests assert on them
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Submit the registration form
    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .form(&[("name", name), ("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the login form
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Location header of a redirect response
pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("Missing Location header")
        .to_str()
        .expect("Invalid Location header")
}
