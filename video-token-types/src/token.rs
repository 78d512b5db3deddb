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

//! Video grant access token (JWT) claims.
//!
//! The token is an HS256 JWT signed with the API key secret. It carries one
//! identity and a video grant for exactly one room. No server-side record of
//! it is kept; a consumer accepts it purely on signature and `exp`.

use serde::{Deserialize, Serialize};

/// Hard ceiling on token lifetime, in seconds (4 hours).
pub const MAX_ALLOWED_SESSION_DURATION: i64 = 14_400;

/// JWT payload for a video grant access token.
///
/// # Example payload
///
/// ```json
/// {
///   "jti": "SK1234-1707004800",
///   "iss": "SK1234",
///   "sub": "AC1234",
///   "iat": 1707004800,
///   "exp": 1707019200,
///   "grants": { "identity": "alice", "video": { "room": "brent" } }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoGrantClaims {
    /// Token identifier: `<iss>-<iat>`.
    pub jti: String,

    /// Signing key identifier.
    pub iss: String,

    /// Account identifier.
    pub sub: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Expiry (Unix seconds). At most `iat + MAX_ALLOWED_SESSION_DURATION`.
    pub exp: i64,

    pub grants: AccessGrants,
}

impl VideoGrantClaims {
    /// Value placed in the JWT header `cty` field.
    pub const CONTENT_TYPE: &'static str = "twilio-fpa;v=1";

    /// Build the `jti` for a key and issued-at time.
    pub fn token_id(key_sid: &str, iat: i64) -> String {
        format!("{key_sid}-{iat}")
    }

    /// Remaining lifetime granted by this token at issue time.
    pub fn ttl_secs(&self) -> i64 {
        self.exp - self.iat
    }
}

/// The `grants` object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessGrants {
    /// Identity of the holder.
    pub identity: String,

    pub video: VideoGrant,
}

/// Capability to join one named room.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoGrant {
    pub room: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_serialize_with_nested_grants() {
        let claims = VideoGrantClaims {
            jti: VideoGrantClaims::token_id("SK1234", 0),
            iss: "SK1234".into(),
            sub: "AC1234".into(),
            iat: 0,
            exp: MAX_ALLOWED_SESSION_DURATION,
            grants: AccessGrants {
                identity: "test-user".into(),
                video: VideoGrant {
                    room: "brent".into(),
                },
            },
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jti": "SK1234-0",
                "iss": "SK1234",
                "sub": "AC1234",
                "iat": 0,
                "exp": 14400,
                "grants": { "identity": "test-user", "video": { "room": "brent" } }
            })
        );
        assert_eq!(claims.ttl_secs(), 14_400);
    }
}
