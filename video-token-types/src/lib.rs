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

//! Shared wire types for the video room token server.
//!
//! This crate defines the contract between the token server and its
//! consumers (browser clients, media servers verifying tokens, tests).
//! It is intentionally framework-agnostic: no axum, no signing code.

pub mod error;
pub mod requests;
pub mod responses;
pub mod token;

pub use error::APIError;
pub use requests::TokenRequest;
pub use responses::{ErrorResponse, TokenResponse, TokenResponseBody};
pub use token::{AccessGrants, VideoGrant, VideoGrantClaims, MAX_ALLOWED_SESSION_DURATION};
