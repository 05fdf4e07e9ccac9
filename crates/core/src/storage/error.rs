use thiserror::Error;

/// Errors that can occur when resolving a timeframe name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeframeError {
    #[error("Unsupported timeframe: {0}")]
    Unsupported(String),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_error_display() {
        assert_eq!(
            TimeframeError::Unsupported("yearly".to_string()).to_string(),
            "Unsupported timeframe: yearly"
        );
    }

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Task",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Task not found: abc-123");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Category",
            id: "cat-1".to_string(),
        };
        assert_eq!(error.to_string(), "Category already exists: cat-1");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("index missing".to_string());
        assert_eq!(error.to_string(), "Query failed: index missing");
    }
}
