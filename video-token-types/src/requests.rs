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

//! Request parameters for `GET /token` and `POST /token`.

use serde::{Deserialize, Serialize};

/// Parameters of a token request.
///
/// Every field is optional on the wire; presence and validity are decided by
/// the server, in a fixed order (room, then passcode, then identity).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    /// Room the caller wants to join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    /// Shared passcode for `room_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,

    /// Caller-chosen identity, opaque to the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl TokenRequest {
    pub fn new(
        room_name: impl Into<String>,
        passcode: impl Into<String>,
        user_identity: impl Into<String>,
    ) -> Self {
        Self {
            room_name: Some(room_name.into()),
            passcode: Some(passcode.into()),
            user_identity: Some(user_identity.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: TokenRequest = serde_json::from_str(r#"{"passcode":"x"}"#).unwrap();
        assert_eq!(req.room_name, None);
        assert_eq!(req.passcode.as_deref(), Some("x"));
        assert_eq!(req.user_identity, None);
    }

    #[test]
    fn none_fields_are_omitted_when_serialized() {
        let req = TokenRequest {
            room_name: Some("brent".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"room_name":"brent"}"#
        );
    }
}
