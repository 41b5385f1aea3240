//! Common API response types

use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::HubError;

/// Message returned for every server-side failure
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of a successful mutation
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Convert HubError to HTTP response.
///
/// Client errors carry their message; anything else is logged and
/// answered with a generic 500.
impl From<HubError> for HttpResponse {
    fn from(error: HubError) -> Self {
        if error.is_client_error() {
            return HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()));
        }

        error!("Request failed: {}", error);
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .json(ErrorResponse::new(SERVER_ERROR_MESSAGE))
    }
}

/// Wrap a HubError so handlers can propagate it with `?`
pub fn api_error(error: HubError) -> actix_web::Error {
    let message = error.to_string();
    InternalError::from_response(message, HttpResponse::from(error)).into()
}

/// Answer unparseable JSON bodies in the same shape as other client errors
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Expected a JSON body".to_string(),
        other => format!("Invalid JSON body: {}", other),
    };
    api_error(HubError::validation(message))
}

/// Result type that can be converted to HttpResponse
pub type ApiResult<T> = Result<T, actix_web::Error>;
