/// Security utilities: session token verification.
pub mod jwt;

pub use jwt::{Claims, SessionVerifier, SESSION_COOKIE};
