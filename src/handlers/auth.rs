/// Auth handlers
///
/// Sign-in and sign-up live in the external auth backend; the only auth
/// action owned here is sign-out, which expires the session cookie.
use actix_web::{
    cookie::{time::Duration, Cookie},
    http::header,
    HttpResponse,
};

use crate::security::SESSION_COOKIE;

/// Expire the session cookie and send the user back to the landing page.
pub async fn logout() -> HttpResponse {
    let expired = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish();

    HttpResponse::SeeOther()
        .cookie(expired)
        .insert_header((header::LOCATION, "/"))
        .finish()
}
