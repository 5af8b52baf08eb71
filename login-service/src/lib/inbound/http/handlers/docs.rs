use axum::response::Html;
use axum::Json;

use crate::doc::ApiDoc;
use utoipa::OpenApi;

/// Interactive documentation page.
///
/// Loads the Swagger UI bundle and points it at the generated document.
const SWAGGER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>login-service API docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: '/api-docs/openapi.json',
        dom_id: '#swagger-ui',
      });
    };
  </script>
</body>
</html>
"#;

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
