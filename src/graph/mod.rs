//! Graph queries over the hub network
//!
//! The adjacency list is rebuilt from the store for every query.

mod adjacency;
mod path_finder;

pub use adjacency::*;
pub use path_finder::*;
