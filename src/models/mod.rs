//! Data models for the hub network
//!
//! A hub is the only persisted entity; the request types here are the
//! validated shapes of the JSON bodies the API accepts.

mod hub;
mod error;

pub use hub::*;
pub use error::*;
