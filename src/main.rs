//! Process entry point: load configuration, wire adapters, serve the API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use breezeway_admin::adapters::{
    admin_router, discount_router, AdminAppState, DiscountAppState, MockFieldExtractor,
    PostgresDiscountRepository, PostgresNotificationSettingsStore, PostgresSecurityEventReader,
    PostgresTagRepository, ResendEmailSender,
};
use breezeway_admin::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    if !config.extraction.use_mock {
        tracing::warn!("vision extraction is not available yet; using the mock extractor");
    }

    let discount_state = DiscountAppState {
        repository: Arc::new(PostgresDiscountRepository::new(pool.clone())),
    };
    let admin_state = AdminAppState {
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        settings: Arc::new(PostgresNotificationSettingsStore::new(pool.clone())),
        email: Arc::new(ResendEmailSender::new(config.email.clone())),
        security_events: Arc::new(PostgresSecurityEventReader::new(pool)),
        extractor: Arc::new(MockFieldExtractor),
    };

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        let origins = config
            .server
            .cors_origins_list()
            .iter()
            .map(|o| o.parse::<http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .nest(
            "/api/discounts",
            discount_router().with_state(discount_state),
        )
        .nest("/api/admin", admin_router().with_state(admin_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors),
        );

    let addr = config.server.socket_addr();
    info!(%addr, environment = ?config.server.environment, "breezeway admin listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
