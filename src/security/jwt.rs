/// Session token verification (HS256)
///
/// Session tokens are minted by the external auth backend and carried in the
/// `rs_session` cookie. This service holds only the shared verification
/// secret; it never issues tokens.
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie set by the auth backend.
pub const SESSION_COOKIE: &str = "rs_session";

/// JWT claims carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Email address
    pub email: String,
}

/// Verifier over the shared session secret
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
}

impl SessionVerifier {
    /// Build a verifier from the shared HS256 secret.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Validate and decode a session token.
    pub fn verify(&self, token: &str) -> Result<TokenData<Claims>> {
        decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| anyhow!("Session token validation failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    fn mint(secret: &str, exp_offset: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + exp_offset).timestamp(),
            email: "cook@example.com".to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_token_signed_with_shared_secret() {
        let verifier = SessionVerifier::from_secret("test-secret");
        let token = mint("test-secret", Duration::hours(1));

        let data = verifier.verify(&token).expect("token should verify");
        assert_eq!(data.claims.email, "cook@example.com");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let verifier = SessionVerifier::from_secret("test-secret");
        let token = mint("another-secret", Duration::hours(1));

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let verifier = SessionVerifier::from_secret("test-secret");
        let token = mint("test-secret", Duration::hours(-1));

        assert!(verifier.verify(&token).is_err());
    }
}
