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

//! Handlers for `/token`.
//!
//! Both handlers are thin: they collect the three parameters, stamp the
//! current time and hand off to [`crate::gate::issue`]. Parameters that
//! cannot be parsed are answered with a JSON 400, never with Axum's
//! plain-text rejections.

use axum::{
    extract::{rejection::QueryRejection, FromRequest, Query, Request, State},
    http::header,
    Form, Json,
};
use chrono::Utc;
use video_token_types::TokenRequest;

use crate::error::AppError;
use crate::gate::{issue, IssuanceResponse};
use crate::state::AppState;

/// Token parameters from a POST body.
///
/// `application/json` and `application/x-www-form-urlencoded` are accepted.
/// A request without a `Content-Type` is treated as if every field were
/// missing.
#[derive(Debug)]
pub struct TokenParams(pub TokenRequest);

impl<S: Send + Sync> FromRequest<S> for TokenParams {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type {
            None => Ok(Self(TokenRequest::default())),
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(request) = Form::<TokenRequest>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::malformed(&e.body_text()))?;
                Ok(Self(request))
            }
            Some(_) => {
                let Json(request) = Json::<TokenRequest>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::malformed(&e.body_text()))?;
                Ok(Self(request))
            }
        }
    }
}

/// GET /token?room_name=..&passcode=..&user_identity=..
pub async fn issue_from_query(
    State(state): State<AppState>,
    query: Result<Query<TokenRequest>, QueryRejection>,
) -> Result<IssuanceResponse, AppError> {
    let Query(request) = query.map_err(|e| AppError::malformed(&e.body_text()))?;
    Ok(issue(&request, &state.issuer, &state.whitelist, Utc::now())?)
}

/// POST /token
pub async fn issue_from_body(
    State(state): State<AppState>,
    TokenParams(request): TokenParams,
) -> Result<IssuanceResponse, AppError> {
    Ok(issue(&request, &state.issuer, &state.whitelist, Utc::now())?)
}
