// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event classification.
//!
//! These never escape a scan. The classifier logs them at debug level and skips
//! the entry; they are public so callers decoding single logs can inspect why
//! a log was not classified.

/// Reasons a log could not be turned into a transfer record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The log does not match the `BridgeExecuted` event shape.
    #[error("Failed to decode BridgeExecuted event: {details}")]
    EventDecode {
        /// Details from the ABI decoder
        details: String,
    },

    /// The log envelope lacks a field the record needs.
    #[error("Log is missing {field}")]
    MissingEnvelope {
        /// Name of the missing envelope field
        field: &'static str,
    },

    /// No text decoding could read the routing payload.
    #[error("Routing payload is not decodable as text")]
    PayloadText,

    /// The routing payload has no usable `c=<digits>` key.
    #[error("No destination chain id in routing payload {payload:?}")]
    UnknownDestination {
        /// The decoded payload text
        payload: String,
    },
}

impl ClassifyError {
    /// Create an `EventDecode` error with details.
    pub fn event_decode(details: impl Into<String>) -> Self {
        ClassifyError::EventDecode {
            details: details.into(),
        }
    }
}
