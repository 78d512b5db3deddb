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

//! Response bodies for the token endpoint.
//!
//! - On success: `{ "token": "<jwt>" }`
//! - On failure: `{ "error": { "message": "...", "explanation": "..." } }`

use serde::{Deserialize, Serialize};

use crate::error::APIError;

/// Success body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed, compact JWT carrying a [`crate::VideoGrantClaims`] payload.
    pub token: String,
}

/// Failure body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: APIError,
}

/// Either body shape. Clients that do not branch on the status code can
/// deserialize into this directly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TokenResponseBody {
    Token(TokenResponse),
    Error(ErrorResponse),
}

impl TokenResponseBody {
    pub fn token(token: String) -> Self {
        Self::Token(TokenResponse { token })
    }

    pub fn error(error: APIError) -> Self {
        Self::Error(ErrorResponse { error })
    }

    /// The issued token, if this is a success body.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(t) => Some(&t.token),
            Self::Error(_) => None,
        }
    }

    /// The error payload, if this is a failure body.
    pub fn as_error(&self) -> Option<&APIError> {
        match self {
            Self::Token(_) => None,
            Self::Error(e) => Some(&e.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_nested_error_object() {
        let body = TokenResponseBody::error(APIError::passcode_incorrect());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": {
                    "message": "passcode incorrect",
                    "explanation": "The passcode used to access this room_name is incorrect."
                }
            })
        );
    }

    #[test]
    fn untagged_body_picks_the_right_variant() {
        let ok: TokenResponseBody = serde_json::from_str(r#"{"token":"a.b.c"}"#).unwrap();
        assert_eq!(ok.as_token(), Some("a.b.c"));
        assert!(ok.as_error().is_none());

        let err: TokenResponseBody = serde_json::from_str(
            r#"{"error":{"message":"missing user_identity","explanation":"The user_identity parameter is missing."}}"#,
        )
        .unwrap();
        assert_eq!(err.as_error(), Some(&APIError::missing_user_identity()));
    }
}
