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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;

use crate::config::{Config, IssuerConfig};
use crate::whitelist::RoomWhitelist;

/// Read-only state shared by all requests.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Signing identity and secret.
    pub issuer: Arc<IssuerConfig>,
    /// Room passcodes, fixed for the lifetime of the process.
    pub whitelist: Arc<RoomWhitelist>,
}

impl AppState {
    pub fn new(issuer: IssuerConfig, whitelist: RoomWhitelist) -> Self {
        Self {
            issuer: Arc::new(issuer),
            whitelist: Arc::new(whitelist),
        }
    }
}

impl From<Config> for AppState {
    fn from(config: Config) -> Self {
        Self::new(config.issuer, config.whitelist)
    }
}
