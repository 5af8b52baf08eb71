use axum::response::Html;
use axum::Extension;

use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::views;

/// Protected home page.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Home page greeting the signed-in user", content_type = "text/html"),
        (status = 303, description = "Not authenticated; redirected to /login")
    )
)]
pub async fn home(Extension(current_user): Extension<CurrentUser>) -> Html<String> {
    Html(views::home_page(&current_user.user.name))
}
