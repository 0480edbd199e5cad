use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mongodb::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use catalog::api_docs::ApiDoc;
use catalog::config::Config;
use catalog::domain::{ItemRepository, StoreHealth};
use catalog::infrastructure::state::{AppState, PriceLimits};
use catalog::infrastructure::{InMemoryItemRepository, MongoItemRepository};
use catalog::server;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Select the repository backend at composition time
    let (item_repo, store_health): (Arc<dyn ItemRepository>, Arc<dyn StoreHealth>) =
        if config.backend == "memory" {
            tracing::info!("Using in-memory repository (no durability)");
            let repo = Arc::new(InMemoryItemRepository::new());
            (repo.clone(), repo)
        } else {
            // One shared client for the process lifetime; the driver is
            // safe for concurrent use and needs no explicit teardown
            let client = Client::with_uri_str(&config.mongodb.connection_string())
                .await
                .expect("Failed to initialize MongoDB client");
            tracing::info!(
                "Using MongoDB repository at {}:{}",
                config.mongodb.host,
                config.mongodb.port
            );
            let repo = Arc::new(MongoItemRepository::new(&client));
            (repo.clone(), repo)
        };

    let state = AppState::new(
        item_repo,
        store_health,
        PriceLimits {
            min: config.price_min,
            max: config.price_max,
        },
    );

    let app = Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(server::build_router(state, &config.cors_allowed_origins));

    // Find available port
    let port = server::find_available_port(config.port).expect("Failed to find available port");

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Catalog server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
