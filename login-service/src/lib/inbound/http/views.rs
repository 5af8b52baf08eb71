//! Server-rendered pages.
//!
//! Three small HTML pages (home, login, register) plus a generic error
//! page. User-supplied values are escaped before interpolation.

/// Escape a value for interpolation into HTML text or attributes.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

fn flash_banner(flash: Option<&str>) -> String {
    match flash {
        Some(message) => format!("<p class=\"flash\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

/// Protected home page greeting the signed-in user by name.
///
/// The logout form tunnels DELETE through a POST via the `_method` query
/// parameter, the way browsers have to.
pub fn home_page(name: &str) -> String {
    let body = format!(
        "<h1>Hi {}</h1>\n\
         <form action=\"/logout?_method=DELETE\" method=\"post\">\n\
           <button type=\"submit\">Log Out</button>\n\
         </form>",
        escape(name)
    );
    layout("Home", &body)
}

/// Login form, with any pending flash message shown above it.
pub fn login_page(flash: Option<&str>) -> String {
    let body = format!(
        "<h1>Login</h1>\n\
         {}\
         <form action=\"/login\" method=\"post\">\n\
           <label for=\"email\">Email</label>\n\
           <input type=\"email\" id=\"email\" name=\"email\" required>\n\
           <label for=\"password\">Password</label>\n\
           <input type=\"password\" id=\"password\" name=\"password\" required>\n\
           <button type=\"submit\">Login</button>\n\
         </form>\n\
         <a href=\"/register\">Register</a>",
        flash_banner(flash)
    );
    layout("Login", &body)
}

/// Registration form, with any pending flash message shown above it.
pub fn register_page(flash: Option<&str>) -> String {
    let body = format!(
        "<h1>Register</h1>\n\
         {}\
         <form action=\"/register\" method=\"post\">\n\
           <label for=\"name\">Name</label>\n\
           <input type=\"text\" id=\"name\" name=\"name\" required>\n\
           <label for=\"email\">Email</label>\n\
           <input type=\"email\" id=\"email\" name=\"email\" required>\n\
           <label for=\"password\">Password</label>\n\
           <input type=\"password\" id=\"password\" name=\"password\" required>\n\
           <button type=\"submit\">Register</button>\n\
         </form>\n\
         <a href=\"/login\">Login</a>",
        flash_banner(flash)
    );
    layout("Register", &body)
}

/// Generic page for errors that escape the redirect-and-flash flow.
pub fn error_page() -> String {
    layout("Error", "<h1>Something went wrong</h1>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_escapes_name() {
        let page = home_page("<script>alert(1)</script>");
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_login_page_shows_flash_once_supplied() {
        assert!(login_page(Some("user not found")).contains("user not found"));
        assert!(!login_page(None).contains("class=\"flash\""));
    }

    #[test]
    fn test_register_page_posts_to_register() {
        let page = register_page(None);
        assert!(page.contains("action=\"/register\""));
        assert!(page.contains("name=\"name\""));
    }
}
