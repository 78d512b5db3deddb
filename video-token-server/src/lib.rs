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

//! Video room token server library.
//!
//! Issues short-lived video grant tokens to callers who present a whitelisted
//! room name, that room's passcode and an identity. The decision itself lives
//! in [`gate`]; the rest of the crate is configuration and a thin Axum host.
//! The binary entry point (`main.rs`) wires the two together.

pub mod config;
pub mod error;
pub mod gate;
pub mod routes;
pub mod state;
pub mod token;
pub mod whitelist;
