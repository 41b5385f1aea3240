//! REST API endpoints using Actix-Web

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use crate::api::responses::{api_error, json_error_handler, ApiResult, SuccessResponse};
use crate::models::{AddHubRequest, ConnectHubsRequest, PathResponse, ShortestPathRequest};
use crate::services::HubService;

use super::health::configure_health_routes;

/// Shared application state
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<HubService>,
}

impl ApiState {
    pub fn new(service: Arc<HubService>) -> Self {
        Self { service }
    }
}

/// Configure all REST API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Health endpoints at root
    configure_health_routes(cfg);

    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(configure_hub_routes)
    );
}

fn configure_hub_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/add_hub", web::post().to(add_hub))
        .route("/connect_hubs", web::post().to(connect_hubs))
        .route("/hubs", web::get().to(list_hubs))
        .route("/shortest_path", web::post().to(shortest_path));
}

// ============================================================================
// Hub Handlers
// ============================================================================

async fn add_hub(
    state: web::Data<ApiState>,
    body: web::Json<AddHubRequest>,
) -> ApiResult<HttpResponse> {
    state.service
        .add_hub(body.into_inner())
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

async fn connect_hubs(
    state: web::Data<ApiState>,
    body: web::Json<ConnectHubsRequest>,
) -> ApiResult<HttpResponse> {
    state.service
        .connect_hubs(body.into_inner())
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

async fn list_hubs(state: web::Data<ApiState>) -> ApiResult<HttpResponse> {
    let hubs = state.service.list_hubs().map_err(api_error)?;

    debug!("Listing {} hubs", hubs.len());
    Ok(HttpResponse::Ok().json(hubs))
}

async fn shortest_path(
    state: web::Data<ApiState>,
    body: web::Json<ShortestPathRequest>,
) -> ApiResult<HttpResponse> {
    let path = state.service
        .shortest_path(body.into_inner())
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(PathResponse { path }))
}
