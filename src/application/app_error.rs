use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),
}

pub type AppResult<T> = Result<T, AppError>;
