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

//! Application configuration loaded from environment variables.

use std::collections::HashMap;
use std::env;

use secrecy::SecretString;
use thiserror::Error;
use video_token_types::MAX_ALLOWED_SESSION_DURATION;

use crate::whitelist::{RoomWhitelist, WhitelistError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("One of ROOM_WHITELIST_PATH or ROOM_WHITELIST must be set")]
    MissingWhitelist,

    #[error("Invalid room whitelist: {0}")]
    Whitelist(#[from] WhitelistError),
}

/// Signing identity used to mint tokens.
///
/// `Debug` is safe to log: the secret is redacted by [`SecretString`].
#[derive(Debug)]
pub struct IssuerConfig {
    /// Account identifier, written to `sub`.
    pub account_sid: String,
    /// Signing key identifier, written to `iss` and used as the `jti` prefix.
    pub api_key_sid: String,
    /// HMAC-SHA256 signing secret.
    pub api_key_secret: SecretString,
    /// Token lifetime in seconds. Always [`MAX_ALLOWED_SESSION_DURATION`].
    pub max_session_duration_secs: i64,
}

impl IssuerConfig {
    /// Issuer whose tokens live for the fixed 4 hour session duration.
    pub fn new(
        account_sid: impl Into<String>,
        api_key_sid: impl Into<String>,
        api_key_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            api_key_sid: api_key_sid.into(),
            api_key_secret: SecretString::from(api_key_secret.into()),
            max_session_duration_secs: MAX_ALLOWED_SESSION_DURATION,
        }
    }
}

/// Configuration for the token server.
#[derive(Debug)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8081").
    pub listen_addr: String,
    pub issuer: IssuerConfig,
    pub whitelist: RoomWhitelist,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `ACCOUNT_SID`
    /// - `API_KEY_SID`
    /// - `API_KEY_SECRET`
    /// - `ROOM_WHITELIST_PATH` or `ROOM_WHITELIST` (path wins if both are set)
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8081"`)
    ///
    /// Token lifetime is not configurable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map of variables. Empty values count as unset.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty());
        let require = |key: &str| {
            get(key)
                .cloned()
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let account_sid = require("ACCOUNT_SID")?;
        let api_key_sid = require("API_KEY_SID")?;
        let api_key_secret = require("API_KEY_SECRET")?;

        let issuer = IssuerConfig::new(account_sid, api_key_sid, api_key_secret);

        let whitelist = match (get("ROOM_WHITELIST_PATH"), get("ROOM_WHITELIST")) {
            (Some(path), _) => RoomWhitelist::from_file(path)?,
            (None, Some(json)) => RoomWhitelist::from_json_str(json)?,
            (None, None) => return Err(ConfigError::MissingWhitelist),
        };

        let listen_addr = get("LISTEN_ADDR")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            listen_addr,
            issuer,
            whitelist,
        })
    }
}
