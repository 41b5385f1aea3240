//! Service layer for business logic and validation

mod hub_service;

pub use hub_service::*;
