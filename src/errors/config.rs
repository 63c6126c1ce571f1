// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration and flow wiring.

use alloy_chains::Chain;

/// Errors raised while building a configuration or a set of flow fetchers.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent.
    ///
    /// Usually an environment variable read by the binary.
    #[error("Missing configuration: {field}")]
    Missing {
        /// Name of the missing setting
        field: String,
    },

    /// A setting is present but cannot be parsed.
    #[error("Invalid configuration for {field}: {details}")]
    Invalid {
        /// Name of the setting
        field: String,
        /// Parser message
        details: String,
    },

    /// No log source was registered for the target chain.
    #[error("No log source registered for target chain {chain}")]
    MissingTargetSource {
        /// The configured target chain
        chain: Chain,
    },

    /// The same chain was registered twice, or a source chain equals the target.
    #[error("Chain {chain} registered more than once")]
    DuplicateChain {
        /// The repeated chain
        chain: Chain,
    },
}

impl ConfigError {
    /// Create a `Missing` error for a specific field.
    pub fn missing(field: impl Into<String>) -> Self {
        ConfigError::Missing {
            field: field.into(),
        }
    }

    /// Create an `Invalid` error for a field with parser details.
    pub fn invalid(field: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            details: details.into(),
        }
    }
}
