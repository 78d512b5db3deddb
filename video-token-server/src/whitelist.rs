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

//! Room passcode whitelist.
//!
//! The whitelist maps each joinable room to the single passcode that unlocks
//! it. It is built once at startup and shared read-only between requests, so
//! rotating passcodes is a configuration change rather than a code change.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use thiserror::Error;

/// Errors raised while building a [`RoomWhitelist`].
#[derive(Debug, Error)]
pub enum WhitelistError {
    #[error("room name must not be empty")]
    EmptyRoomName,

    #[error("passcode for room '{0}' must not be empty")]
    EmptyPasscode(String),

    #[error("room '{0}' is listed more than once")]
    DuplicateRoom(String),

    #[error("failed to read whitelist file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("whitelist must be a JSON object of room name to passcode: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One `(room, passcode)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPasscodeEntry {
    pub room_name: String,
    pub passcode: String,
}

impl RoomPasscodeEntry {
    pub fn new(room_name: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            passcode: passcode.into(),
        }
    }
}

/// Immutable set of rooms and their passcodes.
///
/// Every room has a non-empty passcode; an entry that could never be
/// satisfied is rejected at construction instead of at request time.
#[derive(Clone, Default)]
pub struct RoomWhitelist {
    rooms: HashMap<String, String>,
}

impl RoomWhitelist {
    /// Build from explicit entries. Room names are unique keys.
    pub fn from_entries(
        entries: impl IntoIterator<Item = RoomPasscodeEntry>,
    ) -> Result<Self, WhitelistError> {
        let mut rooms = HashMap::new();
        for RoomPasscodeEntry {
            room_name,
            passcode,
        } in entries
        {
            if room_name.is_empty() {
                return Err(WhitelistError::EmptyRoomName);
            }
            if passcode.is_empty() {
                return Err(WhitelistError::EmptyPasscode(room_name));
            }
            if rooms.contains_key(&room_name) {
                return Err(WhitelistError::DuplicateRoom(room_name));
            }
            rooms.insert(room_name, passcode);
        }
        Ok(Self { rooms })
    }

    /// Parse a JSON object such as `{"brent": "eb3ed78b..."}`.
    ///
    /// A room key repeated inside the object is a [`WhitelistError::DuplicateRoom`].
    pub fn from_json_str(json: &str) -> Result<Self, WhitelistError> {
        let EntryList(entries) = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a JSON whitelist file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WhitelistError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WhitelistError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn contains_room(&self, room_name: &str) -> bool {
        self.rooms.contains_key(room_name)
    }

    /// Exact, case-sensitive passcode check for a room.
    ///
    /// Returns `false` for unknown rooms. The byte comparison is constant-time
    /// via `ring::constant_time`.
    pub fn verify_passcode(&self, room_name: &str, passcode: &str) -> bool {
        match self.rooms.get(room_name) {
            Some(expected) => {
                ring::constant_time::verify_slices_are_equal(
                    expected.as_bytes(),
                    passcode.as_bytes(),
                )
                .is_ok()
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room names, sorted.
    pub fn rooms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RoomWhitelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomWhitelist")
            .field("rooms", &self.rooms())
            .field("passcodes", &"[REDACTED]")
            .finish()
    }
}

/// Every key/value pair of a JSON object, in document order.
///
/// Deserializing straight into a map would keep only the last of repeated
/// keys and hide the duplicate from [`RoomWhitelist::from_entries`].
struct EntryList(Vec<RoomPasscodeEntry>);

impl<'de> Deserialize<'de> for EntryList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = EntryList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping room names to passcodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((room, passcode)) = map.next_entry::<String, String>()? {
                    entries.push(RoomPasscodeEntry::new(room, passcode));
                }
                Ok(EntryList(entries))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}
