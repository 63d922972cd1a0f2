use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `TOKEN_MISSING`,
    /// `TOKEN_INVALID`, `NOT_FOUND`, `CONFLICT`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Name must be 1-256 characters")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    TokenMissing,
    TokenInvalid,
    NotFound(String),
    Conflict(String),
    /// Anything unexpected. The detail is logged, never sent to the client.
    Internal(String),
}

impl AppError {
    /// Classify a failed insert/update: constraint violations are the
    /// caller's fault, everything else is internal.
    pub fn from_write(err: DbErr) -> Self {
        Self::classify(err, "Referenced record does not exist")
    }

    /// Like [`AppError::from_write`], for deletes: a foreign-key violation
    /// means other rows still point at the target.
    pub fn from_delete(err: DbErr) -> Self {
        Self::classify(err, "Record is still referenced by other records")
    }

    fn classify(err: DbErr, fk_message: &str) -> Self {
        err.sql_err()
            .and_then(|sql| Self::from_constraint(sql, fk_message))
            .unwrap_or_else(|| AppError::from(err))
    }

    fn from_constraint(sql: SqlErr, fk_message: &str) -> Option<Self> {
        match sql {
            SqlErr::UniqueConstraintViolation(detail) => {
                tracing::debug!("Unique constraint violated: {detail}");
                Some(AppError::Conflict(
                    "A record with the same unique value already exists".into(),
                ))
            }
            SqlErr::ForeignKeyConstraintViolation(detail) => {
                tracing::debug!("Foreign key constraint violated: {detail}");
                Some(AppError::Validation(fk_message.into()))
            }
            _ => None,
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::TokenMissing => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    code: "TOKEN_MISSING",
                    message: "Authentication required".into(),
                },
            ),
            AppError::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    code: "TOKEN_INVALID",
                    message: "Invalid or expired token".into(),
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    code: "CONFLICT",
                    message: msg,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}
