/// Session cookie extractors
///
/// Auth status is resolved per request from the `rs_session` cookie. Pages
/// use the infallible tri-state `AuthState`; API handlers use `SessionUser`,
/// which rejects unauthenticated requests with 401.
use actix_web::{
    dev::Payload, error::ErrorUnauthorized, web, Error, FromRequest, HttpRequest,
};
use futures::future::{ready, Ready};
use uuid::Uuid;

use crate::security::{SessionVerifier, SESSION_COOKIE};

/// Identity of a signed-in user, taken from verified session claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

/// Tri-state auth status for page rendering.
///
/// The three states are mutually exclusive: `Unknown` while session
/// verification is unavailable (no verifier provisioned), `SignedIn` for a
/// valid session cookie, `SignedOut` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unknown,
    SignedIn(SessionUser),
    SignedOut,
}

fn resolve_auth_state(req: &HttpRequest) -> AuthState {
    let Some(verifier) = req.app_data::<web::Data<SessionVerifier>>() else {
        return AuthState::Unknown;
    };

    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return AuthState::SignedOut;
    };

    match verifier.verify(cookie.value()) {
        Ok(data) => match Uuid::parse_str(&data.claims.sub) {
            Ok(id) => AuthState::SignedIn(SessionUser {
                id,
                email: data.claims.email,
            }),
            Err(_) => {
                tracing::debug!("session token carried a non-UUID subject");
                AuthState::SignedOut
            }
        },
        Err(e) => {
            tracing::debug!("session token rejected: {}", e);
            AuthState::SignedOut
        }
    }
}

impl FromRequest for AuthState {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(resolve_auth_state(req)))
    }
}

impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match resolve_auth_state(req) {
            AuthState::SignedIn(user) => ready(Ok(user)),
            AuthState::SignedOut => ready(Err(ErrorUnauthorized("Missing or invalid session"))),
            AuthState::Unknown => ready(Err(ErrorUnauthorized(
                "Session verification is not configured",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    use crate::security::Claims;

    const SECRET: &str = "extractor-test-secret";

    fn mint(sub: &str, email: &str) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            email: email.to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn unknown_without_verifier() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(resolve_auth_state(&req), AuthState::Unknown);
    }

    #[test]
    fn signed_out_without_cookie() {
        let req = TestRequest::default()
            .app_data(web::Data::new(SessionVerifier::from_secret(SECRET)))
            .to_http_request();
        assert_eq!(resolve_auth_state(&req), AuthState::SignedOut);
    }

    #[test]
    fn signed_out_with_garbage_cookie() {
        let req = TestRequest::default()
            .app_data(web::Data::new(SessionVerifier::from_secret(SECRET)))
            .cookie(Cookie::new(SESSION_COOKIE, "not-a-jwt"))
            .to_http_request();
        assert_eq!(resolve_auth_state(&req), AuthState::SignedOut);
    }

    #[test]
    fn signed_in_with_valid_cookie() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .app_data(web::Data::new(SessionVerifier::from_secret(SECRET)))
            .cookie(Cookie::new(SESSION_COOKIE, mint(&id.to_string(), "a@b.co")))
            .to_http_request();

        match resolve_auth_state(&req) {
            AuthState::SignedIn(user) => {
                assert_eq!(user.id, id);
                assert_eq!(user.email, "a@b.co");
            }
            other => panic!("expected SignedIn, got {:?}", other),
        }
    }

    #[test]
    fn signed_out_with_non_uuid_subject() {
        let req = TestRequest::default()
            .app_data(web::Data::new(SessionVerifier::from_secret(SECRET)))
            .cookie(Cookie::new(SESSION_COOKIE, mint("service-account", "a@b.co")))
            .to_http_request();
        assert_eq!(resolve_auth_state(&req), AuthState::SignedOut);
    }
}
