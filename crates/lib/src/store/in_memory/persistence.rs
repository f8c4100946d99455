//! Persistence operations for the InMemory store
//!
//! This module handles serialization and file I/O for saving/loading
//! an in-memory list to/from JSON files.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use super::{InMemory, ListState};
use crate::{
    Error, Result, constants::PERSISTENCE_VERSION, store::RankedItem, store::StoreError,
};

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk form of a list: items in rank order.
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "Id: Serialize", deserialize = "Id: DeserializeOwned"))]
struct SerializableList<Id> {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    items: Vec<RankedItem<Id>>,
}

pub(crate) fn save_to_file<Id, P>(items: Vec<RankedItem<Id>>, path: P) -> Result<()>
where
    Id: Serialize,
    P: AsRef<Path>,
{
    let serializable = SerializableList {
        version: PERSISTENCE_VERSION,
        items,
    };

    let json = serde_json::to_string_pretty(&serializable)
        .map_err(|e| -> Error { StoreError::SerializationFailed { source: e }.into() })?;
    std::fs::write(path, json).map_err(|e| -> Error { StoreError::FileIo { source: e }.into() })
}

pub(crate) fn load_from_file<Id, P>(path: P) -> Result<InMemory<Id>>
where
    Id: Clone + Ord + Hash + Debug + Display + DeserializeOwned,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path) {
        Ok(json) => {
            let list: SerializableList<Id> = serde_json::from_str(&json).map_err(|e| -> Error {
                StoreError::DeserializationFailed { source: e }.into()
            })?;

            let mut state = ListState::default();
            for item in list.items {
                state.insert(item.id, item.rank);
            }
            tracing::debug!(items = state.ranks.len(), "Loaded in-memory list");
            Ok(InMemory::from_state(state))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(InMemory::new()),
        Err(e) => Err(StoreError::FileIo { source: e }.into()),
    }
}
