//! Error types module
//!
//! All errors in the data-access layer are unified under the [`AppError`]
//! enum. Repositories never suppress errors; the API crate converts them
//! into the platform-wide JSON error envelope at the handler boundary.

/// Unified application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input failed schema constraints. Carries the per-field violations.
    #[error("Validation error")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Database(_) | AppError::Internal(_) => 500,
        }
    }

    /// Error type name for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database",
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }
}
