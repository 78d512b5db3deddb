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

//! API error payload.
//!
//! Every failed response carries `{ "error": APIError }`. The `message` and
//! `explanation` strings are relied upon by existing clients and must not
//! change.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `error` field of a failed response.
///
/// `message` is a short machine-friendly summary (e.g. `"passcode incorrect"`),
/// `explanation` is one user-facing sentence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct APIError {
    pub message: String,
    pub explanation: String,
}

impl APIError {
    pub fn new(message: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            explanation: explanation.into(),
        }
    }

    /// Room name missing, empty, or not on the whitelist (HTTP 401).
    pub fn room_name_incorrect() -> Self {
        Self::new(
            "room_name incorrect",
            "The room_name submitted is incorrect.",
        )
    }

    /// Passcode missing, empty, or wrong for the room (HTTP 401).
    pub fn passcode_incorrect() -> Self {
        Self::new(
            "passcode incorrect",
            "The passcode used to access this room_name is incorrect.",
        )
    }

    /// No `user_identity` supplied (HTTP 400).
    pub fn missing_user_identity() -> Self {
        Self::new(
            "missing user_identity",
            "The user_identity parameter is missing.",
        )
    }

    /// Parameters that could not be parsed, e.g. malformed JSON (HTTP 400).
    pub fn malformed_request() -> Self {
        Self::new(
            "malformed request",
            "The request parameters could not be parsed.",
        )
    }

    /// Server-side misconfiguration (HTTP 500). Carries no detail on purpose;
    /// the cause is logged by the server.
    pub fn internal_error() -> Self {
        Self::new(
            "internal error",
            "The server was unable to issue a token. Please try again later.",
        )
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.explanation)
    }
}

impl std::error::Error for APIError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_strings_are_stable() {
        let e = APIError::room_name_incorrect();
        assert_eq!(e.message, "room_name incorrect");
        assert_eq!(e.explanation, "The room_name submitted is incorrect.");

        let e = APIError::passcode_incorrect();
        assert_eq!(e.message, "passcode incorrect");
        assert_eq!(
            e.explanation,
            "The passcode used to access this room_name is incorrect."
        );

        let e = APIError::missing_user_identity();
        assert_eq!(e.message, "missing user_identity");
        assert_eq!(e.explanation, "The user_identity parameter is missing.");
    }

    #[test]
    fn display_joins_message_and_explanation() {
        assert_eq!(
            APIError::missing_user_identity().to_string(),
            "missing user_identity: The user_identity parameter is missing."
        );
    }
}
