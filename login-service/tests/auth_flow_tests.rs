mod common;

use common::location;
use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_register_then_login_grants_access_to_home() {
    let app = TestApp::spawn().await;

    let response = app.register("A", "a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = app.login("a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Hi A"));
}

#[tokio::test]
async fn test_home_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_with_unknown_email_fails() {
    let app = TestApp::spawn().await;

    let response = app.login("nobody@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // No session was established
    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;

    let response = app.login("a@x.com", "wrong").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_failed_login_flashes_once() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;
    app.login("a@x.com", "wrong").await;

    // The flash message survives the redirect...
    let response = app
        .get("/login")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("incorrect password"));

    // ...and is gone on the next render
    let response = app
        .get("/login")
        .send()
        .await
        .expect("Failed to execute request");
    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains("incorrect password"));
}

#[tokio::test]
async fn test_login_after_failed_attempt_rotates_session() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;

    // The failed attempt leaves an anonymous flash session behind
    app.login("a@x.com", "wrong").await;

    let response = app.login("a@x.com", "secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_email_flash_message() {
    let app = TestApp::spawn().await;

    app.login("nobody@x.com", "secret").await;

    let response = app
        .get("/login")
        .send()
        .await
        .expect("Failed to execute request");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("user not found"));
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;
    app.login("a@x.com", "secret").await;

    let response = app
        .delete("/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // The old session no longer grants access
    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_logout_via_method_override() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;
    app.login("a@x.com", "secret").await;

    // What the home page logout form actually sends
    let response = app
        .post("/logout?_method=DELETE")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_anonymous_gets_forms_authenticated_is_redirected() {
    let app = TestApp::spawn().await;

    // Anonymous visitors get the forms
    let response = app
        .get("/login")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .text()
        .await
        .expect("Failed to read body")
        .contains("action=\"/login\""));

    let response = app
        .get("/register")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .text()
        .await
        .expect("Failed to read body")
        .contains("action=\"/register\""));

    // Authenticated visitors are bounced to the home page
    app.register("A", "a@x.com", "secret").await;
    app.login("a@x.com", "secret").await;

    let response = app
        .get("/login")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = app
        .get("/register")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_duplicate_email_registration_is_rejected() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "secret").await;

    let response = app.register("B", "a@x.com", "other").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");

    let response = app
        .get("/register")
        .send()
        .await
        .expect("Failed to execute request");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("already registered"));

    // The first account still works
    let response = app.login("a@x.com", "secret").await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_invalid_email_registration_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.register("A", "not-an-email", "secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");

    let response = app
        .get("/register")
        .send()
        .await
        .expect("Failed to execute request");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Invalid email format"));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs/openapi.json")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    for path in ["/", "/login", "/register", "/logout"] {
        assert!(
            body["paths"].get(path).is_some(),
            "missing {} in document",
            path
        );
    }
}

#[tokio::test]
async fn test_docs_page_serves_swagger_ui() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .text()
        .await
        .expect("Failed to read body")
        .contains("swagger-ui"));
}
