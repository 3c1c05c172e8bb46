// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Store configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a [`HexaStore`](crate::HexaStore).
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name recorded on the store's tracing span.
    pub label: String,
    /// Id assigned to the first term the dictionary sees.
    pub first_term_id: u32,
    /// Number of distinct terms to reserve dictionary room for up front.
    pub term_capacity: usize,
    /// Emit a `warn` event when a pattern has no bound term or no variable.
    pub warn_on_unmatchable: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            label: String::from("hexastore"),
            first_term_id: 0,
            term_capacity: 0,
            warn_on_unmatchable: true,
        }
    }
}

impl StoreConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Serializes to pretty JSON.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Rejects configs that leave the dictionary no id space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_term_id == u32::MAX {
            return Err(ConfigError::Invalid(format!(
                "first_term_id {} leaves no room for term ids",
                self.first_term_id
            )));
        }
        Ok(())
    }
}
