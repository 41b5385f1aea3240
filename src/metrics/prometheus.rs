//! Prometheus metrics integration

use actix_web::{get, HttpResponse};
use once_cell::sync::Lazy;
use prometheus::{Encoder, TextEncoder, IntCounter, IntGauge, Histogram, HistogramOpts, opts, register_int_counter, register_int_gauge, register_histogram};

static HUBS_ADDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("hub_network_hubs_added_total", "Total number of hubs created")
    )
    .expect("Failed to create hubs added counter")
});

static CONNECTIONS_MADE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("hub_network_connections_made_total", "Total number of hub connections created")
    )
    .expect("Failed to create connections counter")
});

static PATH_QUERIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("hub_network_path_queries_total", "Total number of shortest path queries")
    )
    .expect("Failed to create path queries counter")
});

static PATH_QUERY_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(HistogramOpts::new(
        "hub_network_path_query_duration_seconds",
        "Shortest path query duration in seconds, including graph load"
    ))
    .expect("Failed to create path query duration histogram")
});

static HUBS_TOTAL: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        opts!("hub_network_hubs", "Number of hubs in storage")
    )
    .expect("Failed to create hubs gauge")
});

/// Initialize all metrics
pub fn init_metrics() {
    // Force lazy initialization
    Lazy::force(&HUBS_ADDED_TOTAL);
    Lazy::force(&CONNECTIONS_MADE_TOTAL);
    Lazy::force(&PATH_QUERIES_TOTAL);
    Lazy::force(&PATH_QUERY_DURATION);
    Lazy::force(&HUBS_TOTAL);
}

/// Record a created hub
pub fn record_hub_added() {
    HUBS_ADDED_TOTAL.inc();
    HUBS_TOTAL.inc();
}

/// Record a new connection between two hubs
pub fn record_connection_made() {
    CONNECTIONS_MADE_TOTAL.inc();
}

/// Record a shortest path query and its duration
pub fn record_path_query(duration_secs: f64) {
    PATH_QUERIES_TOTAL.inc();
    PATH_QUERY_DURATION.observe(duration_secs);
}

/// Set hub count
pub fn set_hubs_total(count: i64) {
    HUBS_TOTAL.set(count);
}

/// Prometheus metrics endpoint
#[get("/metrics")]
pub async fn metrics_endpoint() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(format!("Failed to encode metrics: {}", e));
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(buffer)
}
