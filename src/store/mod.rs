//! Storage layer for the hub network
//!
//! Uses RocksDB for hub storage.

mod rocks;
mod hubs;

pub use rocks::*;
pub use hubs::*;
