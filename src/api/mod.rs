//! HTTP API for the hub network
//!
//! JSON endpoints under `/api` plus health checks at the root.

mod rest;
mod health;
mod responses;
mod cors;

pub use rest::*;
pub use health::*;
pub use responses::*;
pub use cors::*;
