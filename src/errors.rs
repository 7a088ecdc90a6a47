use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Error taxonomy for the league API.
///
/// Duplicate records during sync are NOT errors: they are counted as
/// `skipped` in the sync summary.
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    /// Bad enum value, out-of-range week/season. Rejected before any mutation.
    #[error("{0}")]
    Validation(String),

    /// Unknown quarterback/squad id.
    #[error("{0} not found")]
    NotFound(String),

    /// Provider timeout/unavailable or season data not yet published.
    /// Partial results committed before the failure are preserved.
    #[error("sync failed: {0}")]
    ExternalSync(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for LeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::Validation(_) => StatusCode::BAD_REQUEST,
            LeagueError::NotFound(_) => StatusCode::NOT_FOUND,
            LeagueError::ExternalSync(_) => StatusCode::BAD_GATEWAY,
            LeagueError::Database(_) | LeagueError::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}
