//! Hub Network - named hubs, bidirectional connections and shortest paths
//!
//! A small HTTP service providing:
//! - Hub storage (RocksDB)
//! - Symmetric connections between hubs
//! - Breadth-first shortest path queries
//! - REST API, health checks and Prometheus metrics

pub mod config;
pub mod models;
pub mod store;
pub mod graph;
pub mod services;
pub mod api;
pub mod metrics;

// Re-export commonly used types
pub use config::Settings;
pub use models::{Hub, HubView, HubError, HubResult};
pub use store::{RocksStore, HubStore};
pub use graph::{HubGraph, shortest_path};
pub use services::HubService;

/// Version of the hub network service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
