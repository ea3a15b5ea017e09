use paradise_api::{app, AppState};
use paradise_store::{app_config::Config, DbClient, PgBookingRepository, PgCatalogRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paradise_api=debug,paradise_core=debug,paradise_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting {} on port {}", paradise_core::STOREFRONT_NAME, config.server.port);

    // One pool for the whole process, shared by both repositories
    let db = DbClient::new(&config.database)
        .await
        .expect("Failed to connect to database");

    if config.database.run_migrations {
        db.migrate().await.expect("Failed to run migrations");
    }

    let app_state = AppState::new(
        Arc::new(PgCatalogRepository::new(db.pool.clone())),
        Arc::new(PgBookingRepository::new(db.pool.clone())),
    );

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
