/// Server-side HTML rendering
///
/// Pages are rendered into strings by plain functions, one module per page,
/// with the shared shell and header here. All user-supplied text goes
/// through [`escape_html`].
pub mod home;

use chrono::{Datelike, Utc};

use crate::middleware::AuthState;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the document shell.
pub fn render_shell(title: &str, header: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ margin: 0; font-family: system-ui, sans-serif; background: #faf9f7; color: #1c1917; }}
a {{ color: inherit; text-decoration: none; }}
header {{ border-bottom: 1px solid #e7e5e4; }}
.container {{ max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }}
.header-row {{ height: 4rem; display: flex; align-items: center; justify-content: space-between; }}
.brand {{ display: flex; align-items: center; gap: 0.5rem; font-weight: 600; }}
.brand-mark {{ width: 1.5rem; height: 1.5rem; border-radius: 0.375rem; background: #ea580c; }}
nav {{ display: flex; align-items: center; gap: 1rem; font-size: 0.875rem; }}
.muted {{ color: #78716c; }}
.btn-primary {{ background: #ea580c; color: #fff; padding: 0.5rem 1rem; border-radius: 0.375rem; border: 0; }}
.btn-ghost {{ background: none; border: 0; color: #78716c; cursor: pointer; font: inherit; }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; margin-top: 1.5rem; }}
article.card {{ border: 1px solid #e7e5e4; border-radius: 0.5rem; overflow: hidden; background: #fff; }}
.card-media {{ aspect-ratio: 16 / 10; background: #f5f5f4; display: flex; align-items: center; justify-content: center; font-size: 2.5rem; }}
.card-media img {{ width: 100%; height: 100%; object-fit: cover; }}
.card-body {{ padding: 1rem; display: flex; flex-direction: column; gap: 0.75rem; }}
.card-title-row {{ display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; }}
.category-pill {{ background: #f5f5f4; border-radius: 9999px; padding: 0.125rem 0.5rem; font-size: 0.625rem; text-transform: uppercase; letter-spacing: 0.05em; }}
.card-meta {{ display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem; color: #78716c; }}
.chips {{ display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }}
.chip {{ border: 1px solid #e7e5e4; border-radius: 9999px; padding: 0.375rem 0.75rem; font-size: 0.8125rem; color: #78716c; background: none; }}
.search-form {{ display: flex; gap: 0.5rem; margin-top: 1.5rem; }}
.search-form input {{ flex: 1; border: 1px solid #e7e5e4; border-radius: 0.375rem; padding: 0.5rem 0.75rem; font-size: 0.875rem; }}
footer {{ margin-top: 3rem; border-top: 1px solid #e7e5e4; }}
.footer-row {{ height: 3.5rem; display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem; color: #78716c; }}
</style>
</head>
<body>
{header}
<main class="container">
{main}
</main>
{footer}
</body>
</html>
"#,
        title = escape_html(title),
        header = header,
        main = main,
        footer = render_footer(),
    )
}

/// Render the site header for the current auth status.
///
/// Exactly one of the three navigation states appears: a loading indicator
/// while status is indeterminate, the user's email plus a sign-out control
/// when signed in, sign-in/sign-up links when signed out.
pub fn render_header(auth: &AuthState) -> String {
    let nav = match auth {
        AuthState::Unknown => r#"<div class="muted">Loading...</div>"#.to_string(),
        AuthState::SignedIn(user) => format!(
            concat!(
                r#"<span class="muted">Welcome, {email}</span>"#,
                r#"<form method="post" action="/auth/logout">"#,
                r#"<button type="submit" class="btn-ghost">Sign Out</button>"#,
                r#"</form>"#
            ),
            email = escape_html(&user.email),
        ),
        AuthState::SignedOut => concat!(
            r#"<a class="muted" href="/login">Sign In</a>"#,
            r#"<a class="btn-primary" href="/signup">Sign Up</a>"#
        )
        .to_string(),
    };

    format!(
        concat!(
            "<header>",
            r#"<div class="container header-row">"#,
            r#"<a class="brand" href="/"><div class="brand-mark"></div><span>RecipeShare</span></a>"#,
            "<nav>{nav}</nav>",
            "</div>",
            "</header>"
        ),
        nav = nav,
    )
}

fn render_footer() -> String {
    format!(
        concat!(
            "<footer>",
            r#"<div class="container footer-row">"#,
            "<span>&copy; {year} RecipeShare</span>",
            r##"<a href="#">About</a>"##,
            "</div>",
            "</footer>"
        ),
        year = Utc::now().year(),
    )
}
