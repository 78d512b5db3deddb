/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Server-side failure type that implements Axum's `IntoResponse`.
//!
//! Request validation failures never reach this type; they are ordinary
//! [`crate::gate::IssuanceResponse`] values. `AppError` covers requests whose
//! parameters cannot be parsed (400) and faults in the server's own
//! configuration, which callers see as a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use video_token_types::{APIError, ErrorResponse};

use crate::token::SigningError;

/// Pairs an HTTP status code with an [`APIError`] body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: APIError,
}

impl AppError {
    pub fn new(status: StatusCode, body: APIError) -> Self {
        Self { status, body }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, APIError::internal_error())
    }

    /// The request parameters could not be parsed at all.
    pub fn malformed(detail: &str) -> Self {
        tracing::warn!("Malformed token request: {detail}");
        Self::new(StatusCode::BAD_REQUEST, APIError::malformed_request())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.body })).into_response()
    }
}

impl From<SigningError> for AppError {
    fn from(err: SigningError) -> Self {
        tracing::error!("Token signing failed: {err}");
        Self::internal()
    }
}
