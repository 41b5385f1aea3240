//! Health, readiness and liveness endpoints

use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::ApiState;

/// Body of `/health` and `/ready`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<f64>,
    /// Stored hub count, reported once the store has answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubs: Option<u64>,
}

/// Process start time and build version
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            version: crate::VERSION.to_string(),
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        let duration = Utc::now().signed_duration_since(self.start_time);
        duration.num_milliseconds() as f64 / 1000.0
    }

    fn report(&self, status: &'static str) -> HealthResponse {
        HealthResponse {
            status,
            version: self.version.clone(),
            timestamp: Utc::now(),
            uptime_seconds: Some(self.uptime_seconds()),
            hubs: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.report("healthy"))
}

/// Ready once the store answers a count query
#[get("/ready")]
pub async fn readiness_check(
    state: web::Data<AppState>,
    api: web::Data<ApiState>,
) -> HttpResponse {
    match api.service.refresh_hub_count() {
        Ok(count) => HttpResponse::Ok().json(HealthResponse {
            hubs: Some(count),
            ..state.report("ready")
        }),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(state.report("unavailable"))
        }
    }
}

#[get("/live")]
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "alive" }))
}

/// Configure health routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
