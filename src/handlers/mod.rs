/// HTTP handlers
///
/// - `home`: the server-rendered landing page
/// - `recipes`: JSON API for authoring recipes
/// - `profile`: the signed-in user's profile
/// - `auth`: sign-out (session issuance lives in the external auth backend)
/// - `health`: health/readiness/liveness probes
pub mod auth;
pub mod health;
pub mod home;
pub mod profile;
pub mod recipes;

pub use auth::logout;
pub use health::{health_check, liveness_check, readiness_check};
pub use home::home;
pub use profile::{get_profile, update_profile};
pub use recipes::{create_recipe, delete_recipe, get_recipe, get_user_recipes, update_recipe};
