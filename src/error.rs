use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Failure taxonomy for the workflow and data-access layers.
///
/// Every workflow raises one of these to the request boundary; there is
/// no structured recovery and no partial application of a mutation.
#[derive(Debug, Error)]
pub enum AppError {
    /// No authenticated identity accompanied the request.
    #[error("not authenticated")]
    Unauthenticated,

    /// A request field failed validation before touching the store.
    #[error("{0}")]
    Validation(String),

    /// A store-enforced uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller is not the owner of the resource they are mutating.
    #[error("{0}")]
    Forbidden(String),

    /// Any other store failure; detail is logged, not surfaced.
    #[error("database error")]
    Database(#[from] DbErr),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Database(ref db_error) = self {
            error!("Store failure: {}", db_error);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Forbidden("not yours".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_database_detail_is_not_surfaced() {
        let err = AppError::Database(DbErr::Custom("secret table detail".into()));
        assert_eq!(err.to_string(), "database error");
    }
}
