/// Request-level auth utilities
///
/// Provides the session cookie extractors (tri-state auth status for pages,
/// required identity for the API) and ownership checks for mutations.
pub mod permissions;
pub mod session;

pub use permissions::*;
pub use session::{AuthState, SessionUser};
