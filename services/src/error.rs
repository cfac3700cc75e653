use thiserror::Error;

/// Failures of the dashboard and assistant services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("student '{0}' not found")]
    StudentNotFound(String),

    #[error("message must not be empty")]
    EmptyMessage,
}
