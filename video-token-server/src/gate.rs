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

//! Token issuance gate.
//!
//! Decides whether a request gets a video grant token. Checks run in a fixed
//! order and the first failure wins, so a request with several problems
//! always reports the earliest one:
//!
//! 1. `room_name` present, non-empty and whitelisted, else 401
//! 2. `passcode` present, non-empty and equal to the room's passcode, else 401
//! 3. `user_identity` present and non-empty, else 400
//!
//! [`issue`] is a pure function of its inputs and `now`. It does no I/O and
//! never mutates the whitelist, so it is safe to call from any number of
//! requests concurrently.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use video_token_types::{APIError, TokenRequest, TokenResponseBody};

use crate::config::IssuerConfig;
use crate::token::{generate_video_token, SigningError};
use crate::whitelist::RoomWhitelist;

/// Why a request was refused. Each variant maps to a fixed status and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IssuanceError {
    #[error("room_name missing or not whitelisted")]
    RoomUnknown,

    #[error("passcode missing or incorrect")]
    PasscodeMismatch,

    #[error("user_identity missing")]
    IdentityMissing,
}

impl IssuanceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RoomUnknown | Self::PasscodeMismatch => StatusCode::UNAUTHORIZED,
            Self::IdentityMissing => StatusCode::BAD_REQUEST,
        }
    }

    pub fn to_api_error(&self) -> APIError {
        match self {
            Self::RoomUnknown => APIError::room_name_incorrect(),
            Self::PasscodeMismatch => APIError::passcode_incorrect(),
            Self::IdentityMissing => APIError::missing_user_identity(),
        }
    }
}

/// A request that passed every check, borrowing from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    pub room_name: &'a str,
    pub identity: &'a str,
}

/// Run the ordered checks without signing anything.
pub fn validate<'a>(
    request: &'a TokenRequest,
    whitelist: &RoomWhitelist,
) -> Result<ValidatedRequest<'a>, IssuanceError> {
    let room_name = request
        .room_name
        .as_deref()
        .filter(|room| !room.is_empty() && whitelist.contains_room(room))
        .ok_or(IssuanceError::RoomUnknown)?;

    let passcode = request
        .passcode
        .as_deref()
        .filter(|passcode| !passcode.is_empty())
        .ok_or(IssuanceError::PasscodeMismatch)?;
    if !whitelist.verify_passcode(room_name, passcode) {
        return Err(IssuanceError::PasscodeMismatch);
    }

    let identity = request
        .user_identity
        .as_deref()
        .filter(|identity| !identity.is_empty())
        .ok_or(IssuanceError::IdentityMissing)?;

    Ok(ValidatedRequest {
        room_name,
        identity,
    })
}

/// Outcome of a token request: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceResponse {
    pub status: StatusCode,
    pub body: TokenResponseBody,
}

impl IssuanceResponse {
    /// Every response body is JSON.
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub fn token(token: String) -> Self {
        Self {
            status: StatusCode::OK,
            body: TokenResponseBody::token(token),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<IssuanceError> for IssuanceResponse {
    fn from(err: IssuanceError) -> Self {
        Self {
            status: err.status(),
            body: TokenResponseBody::error(err.to_api_error()),
        }
    }
}

impl IntoResponse for IssuanceResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Decide a token request.
///
/// Validation failures come back as `Ok` with an error body; the only `Err`
/// is a [`SigningError`], which means the issuer is misconfigured and is left
/// to the caller to turn into a server error.
pub fn issue(
    request: &TokenRequest,
    issuer: &IssuerConfig,
    whitelist: &RoomWhitelist,
    now: DateTime<Utc>,
) -> Result<IssuanceResponse, SigningError> {
    let valid = match validate(request, whitelist) {
        Ok(valid) => valid,
        Err(err) => {
            tracing::warn!(room = ?request.room_name, reason = %err, "Rejected token request");
            return Ok(err.into());
        }
    };

    let token = generate_video_token(issuer, valid.identity, valid.room_name, now)?;

    tracing::info!(
        room = valid.room_name,
        identity = valid.identity,
        "Issued video token"
    );
    Ok(IssuanceResponse::token(token))
}
