use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipeshare::security::SessionVerifier;
use recipeshare::{db, routes, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting recipeshare v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Session verification against the auth backend's shared secret. Without
    // it the header renders the indeterminate auth state rather than failing.
    let session_verifier = match &config.session.jwt_secret {
        Some(secret) => Some(SessionVerifier::from_secret(secret)),
        None => {
            tracing::warn!(
                "SESSION_JWT_SECRET not configured; auth status will render as indeterminate"
            );
            None
        }
    };

    // Database pool (lazy connections; the landing page degrades to the
    // fallback cards while the database is unreachable)
    let db_pool = match db::create_pool(&config.database) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if config.database.run_migrations {
        match db::run_migrations(&db_pool).await {
            Ok(()) => tracing::info!("Database migrations applied"),
            Err(e) => tracing::error!("Migration run failed (continuing): {}", e),
        }
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure_routes);

        if let Some(verifier) = &session_verifier {
            app = app.app_data(web::Data::new(verifier.clone()));
        }

        app
    })
    .bind(&bind_address)?
    .run()
    .await
}
