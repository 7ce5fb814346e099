//! Domain Layer - Core Entity Trait
//!
//! Catalog entities carry no numeric ID; their name is the identity.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's identity key
    fn key(&self) -> &str;

    /// Two values are the same entity when their keys match,
    /// whatever the remaining fields hold.
    fn same_entity(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// Catalog fetch failed or returned a non-success status
    Network(String),
    /// Durable key-value storage failed
    Storage(String),
    Serialization(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NotFound("Vanda".to_string()).to_string(),
            "Not found: Vanda"
        );
        assert_eq!(
            DomainError::Network("HTTP 503".to_string()).to_string(),
            "Network error: HTTP 503"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::Serialization(_)));
    }
}
