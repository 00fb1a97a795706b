/// RecipeShare service library
///
/// A recipe-sharing web service: a server-rendered landing page over a
/// Postgres recipes table, an auth-aware site header driven by a session
/// cookie issued by the external auth backend, and a small JSON API for
/// authoring recipes.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers (landing page, recipes API, auth, health)
/// - `pages`: server-side HTML rendering
/// - `models`: data structures for recipes, profiles, and fallback cards
/// - `db`: database access layer and repositories
/// - `middleware`: session extraction and ownership checks
/// - `security`: session token verification
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod security;

pub use config::Config;
pub use error::{AppError, Result};
