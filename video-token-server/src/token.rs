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

//! JWT video grant token generation and verification.
//!
//! Tokens are signed with the API key secret (HMAC-SHA256). The server keeps
//! no record of what it issued; a consumer holding the same secret validates
//! the signature and `exp` and reads the grant from the claims.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use thiserror::Error;
use video_token_types::{AccessGrants, VideoGrant, VideoGrantClaims};

use crate::config::IssuerConfig;

/// The token could not be produced. Always a server misconfiguration.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("signing key secret is empty")]
    EmptySecret,

    #[error("failed to sign token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// A presented token was rejected.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Sign a video grant token for `identity` in `room`, issued at `now`.
///
/// `iat` is `now` truncated to whole seconds, `exp` is `iat` plus the
/// issuer's session duration, and `jti` is `<api key sid>-<iat>`.
pub fn generate_video_token(
    issuer: &IssuerConfig,
    identity: &str,
    room: &str,
    now: DateTime<Utc>,
) -> Result<String, SigningError> {
    let secret = issuer.api_key_secret.expose_secret();
    if secret.is_empty() {
        return Err(SigningError::EmptySecret);
    }

    let iat = now.timestamp();
    let claims = VideoGrantClaims {
        jti: VideoGrantClaims::token_id(&issuer.api_key_sid, iat),
        iss: issuer.api_key_sid.clone(),
        sub: issuer.account_sid.clone(),
        iat,
        exp: iat + issuer.max_session_duration_secs,
        grants: AccessGrants {
            identity: identity.to_string(),
            video: VideoGrant {
                room: room.to_string(),
            },
        },
    };

    let mut header = Header::new(Algorithm::HS256);
    header.cty = Some(VideoGrantClaims::CONTENT_TYPE.to_string());

    Ok(encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verify signature, expiry and required claims, returning the claims.
pub fn decode_video_token(secret: &str, token: &str) -> Result<VideoGrantClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation.validate_exp = true;

    jsonwebtoken::decode::<VideoGrantClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::decode_header;

    const TEST_SECRET: &str = "super-secret-test-key";

    fn issuer() -> IssuerConfig {
        IssuerConfig::new("AC1234", "SK1234", TEST_SECRET)
    }

    /// Decode without checking `exp`, for tokens issued at fixed past times.
    fn decode_ignoring_expiry(token: &str) -> VideoGrantClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        jsonwebtoken::decode::<VideoGrantClaims>(
            token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .expect("should decode")
        .claims
    }

    #[test]
    fn token_carries_identity_room_and_issuer() {
        let token = generate_video_token(&issuer(), "test-user", "brent", Utc::now())
            .expect("should sign");
        let claims = decode_video_token(TEST_SECRET, &token).expect("should verify");

        assert_eq!(claims.sub, "AC1234");
        assert_eq!(claims.iss, "SK1234");
        assert_eq!(claims.grants.identity, "test-user");
        assert_eq!(claims.grants.video.room, "brent");
        assert_eq!(claims.exp - claims.iat, 14_400);
    }

    #[test]
    fn fixed_clock_yields_known_claims() {
        // 5ms after the epoch truncates to iat = 0.
        let now = Utc.timestamp_millis_opt(5).unwrap();
        let token = generate_video_token(&issuer(), "test-user", "brent", now).unwrap();
        let claims = decode_ignoring_expiry(&token);

        assert_eq!(claims.iat, 0);
        assert_eq!(claims.exp, 14_400);
        assert_eq!(claims.jti, "SK1234-0");
    }

    #[test]
    fn header_marks_hs256_and_content_type() {
        let token = generate_video_token(&issuer(), "u", "r", Utc::now()).unwrap();
        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        assert_eq!(header.cty.as_deref(), Some("twilio-fpa;v=1"));
    }

    #[test]
    fn same_inputs_same_instant_give_identical_tokens() {
        let now = Utc::now();
        let a = generate_video_token(&issuer(), "u", "r", now).unwrap();
        let b = generate_video_token(&issuer(), "u", "r", now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_secret_is_a_signing_failure() {
        let issuer = IssuerConfig::new("AC1234", "SK1234", "");
        let err = generate_video_token(&issuer, "u", "r", Utc::now()).unwrap_err();
        assert!(matches!(err, SigningError::EmptySecret));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_video_token(&issuer(), "u", "r", Utc::now()).unwrap();
        let err = decode_video_token("another-secret", &token).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let long_ago = Utc.timestamp_opt(1_000_000, 0).unwrap();
        let token = generate_video_token(&issuer(), "u", "r", long_ago).unwrap();
        let err = decode_video_token(TEST_SECRET, &token).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = decode_video_token(TEST_SECRET, "not-a-jwt").unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }
}
