//! Metrics for the hub network

mod prometheus;

pub use self::prometheus::*;
