// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types.
//!
//! Matching never fails: unmatchable shapes and unknown terms both produce an
//! empty result. Errors are reserved for operations the store does not
//! provide and for configuration problems.

use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested operation is declared but not implemented.
    #[error("[HEXA_UNSUPPORTED] {operation} is not supported by this store")]
    Unsupported {
        /// Human-readable name of the operation.
        operation: &'static str,
    },
}

/// Errors raised while loading or validating a [`StoreConfig`].
///
/// [`StoreConfig`]: crate::StoreConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The config parsed but describes an unusable store.
    #[error("invalid config: {0}")]
    Invalid(String),
}
