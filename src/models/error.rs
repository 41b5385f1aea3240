//! Error types for the hub network

use thiserror::Error;

/// Hub network errors
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Hub not found")]
    NotFound { id: String },

    #[error("Hub exists")]
    AlreadyExists { id: String },

    #[error("Cannot connect same hub")]
    SelfConnection { id: String },

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl HubError {
    pub fn not_found(id: impl Into<String>) -> Self {
        HubError::NotFound { id: id.into() }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        HubError::AlreadyExists { id: id.into() }
    }

    pub fn self_connection(id: impl Into<String>) -> Self {
        HubError::SelfConnection { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        HubError::ValidationError(message.into())
    }

    /// Whether the error was caused by the caller rather than the hub itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            HubError::NotFound { .. }
                | HubError::AlreadyExists { .. }
                | HubError::SelfConnection { .. }
                | HubError::ValidationError(_)
        )
    }
}

impl From<rocksdb::Error> for HubError {
    fn from(err: rocksdb::Error) -> Self {
        HubError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for HubError {
    fn from(err: config::ConfigError) -> Self {
        HubError::ConfigError(err.to_string())
    }
}

/// Result type for hub operations
pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_facing_messages() {
        assert_eq!(HubError::already_exists("A").to_string(), "Hub exists");
        assert_eq!(HubError::not_found("A").to_string(), "Hub not found");
        assert_eq!(
            HubError::self_connection("A").to_string(),
            "Cannot connect same hub"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(HubError::validation("hubId and name required").is_client_error());
        assert!(HubError::not_found("A").is_client_error());
        assert!(!HubError::DatabaseError("io".into()).is_client_error());
        assert!(!HubError::ConfigError("bad port".into()).is_client_error());
    }
}
