//! Route configuration
//!
//! Centralized route setup so `main.rs` and the integration tests build the
//! same application tree.

use actix_web::web;

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Server-rendered pages
        .route("/", web::get().to(handlers::home))
        .route("/auth/logout", web::post().to(handlers::logout))
        // API routes
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
                .route("/health/ready", web::get().to(handlers::readiness_check))
                .route("/health/live", web::get().to(handlers::liveness_check))
                .service(
                    web::scope("/recipes")
                        .service(
                            web::resource("")
                                .route(web::post().to(handlers::create_recipe)),
                        )
                        .service(
                            web::resource("/user/{user_id}")
                                .route(web::get().to(handlers::get_user_recipes)),
                        )
                        .service(
                            web::resource("/{recipe_id}")
                                .route(web::get().to(handlers::get_recipe))
                                .route(web::patch().to(handlers::update_recipe))
                                .route(web::delete().to(handlers::delete_recipe)),
                        ),
                )
                .service(
                    web::resource("/profile")
                        .route(web::get().to(handlers::get_profile))
                        .route(web::patch().to(handlers::update_profile)),
                ),
        );
}
