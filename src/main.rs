//! Hub Network - Main Entry Point
//!
//! Opens the hub store and starts the HTTP server.

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hub_network::api::{build_cors, configure_routes, parse_origins, ApiState, AppState, CorsOrigins};
use hub_network::config::Settings;
use hub_network::metrics::{init_metrics, metrics_endpoint};
use hub_network::services::HubService;
use hub_network::store::{HubStore, RocksStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Default: info level for hub_network, warn for everything else
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,hub_network=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true))
        .init();

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Settings::default()
    });

    info!("Starting Hub Network v{}", hub_network::VERSION);

    if settings.metrics.enabled {
        init_metrics();
    }

    let rocks_store = RocksStore::open_with_settings(&settings.database).map_err(|e| {
        error!("Failed to open database at {}: {}", settings.database.data_dir, e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Database initialized at: {}", settings.database.data_dir);

    let hub_store = Arc::new(HubStore::new(rocks_store));
    let hub_service = Arc::new(HubService::new(hub_store));

    match hub_service.refresh_hub_count() {
        Ok(count) => info!("Loaded {} hubs", count),
        Err(e) => error!("Failed to count hubs: {}", e),
    }

    let app_state = AppState::new();
    let api_state = ApiState::new(Arc::clone(&hub_service));

    let http_addr = settings.http_addr();
    info!("Starting HTTP server on {}", http_addr);

    let cors_origins = settings.server.cors_origins.clone();
    match parse_origins(&cors_origins) {
        CorsOrigins::Any => tracing::warn!(
            "CORS: permissive (dev mode). Set server.cors_origins to restrict origins."
        ),
        CorsOrigins::List(allowed) => info!("CORS: restricted to {} origin(s)", allowed.len()),
    }
    let metrics_enabled = settings.metrics.enabled;

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(api_state.clone()))
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes);

        if metrics_enabled {
            app.service(metrics_endpoint)
        } else {
            app
        }
    })
    .workers(settings.server.workers)
    .bind(&http_addr)?
    .run()
    .await?;

    info!("Hub Network stopped");
    Ok(())
}
