//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and controllers. It
//! implements `IntoResponse` so handlers can use `?` and still answer with a JSON
//! `ErrorDto` body and a meaningful status code.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error, e.g. while creating the storage directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// A unique value is already taken.
    ///
    /// Results in 409 Conflict; the client shows its own "already exists" message
    /// based on the status alone.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For everything else, with a generic body
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a 500 response with a generic body.
///
/// The full error is logged so implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("taken".into()), StatusCode::CONFLICT),
            (
                AppError::InternalError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::DbErr(sea_orm::DbErr::Custom("db".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
