use thiserror::Error;

/// Errors that can occur when validating task payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task title too long (max 200 characters)")]
    TitleTooLong,
}

/// Errors that can occur when validating category payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_display() {
        assert_eq!(TaskError::EmptyTitle.to_string(), "Task title cannot be empty");
    }

    #[test]
    fn test_category_error_display() {
        assert_eq!(
            CategoryError::InvalidColor("#xyz".to_string()).to_string(),
            "Invalid color format: #xyz"
        );
    }
}
