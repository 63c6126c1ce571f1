// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by a [`LogSource`](crate::LogSource).
//!
//! The range scanner treats every variant the same way: the chunk is shrunk and
//! retried. The variants exist so that log lines and terminal errors carry
//! useful context.

/// Errors that can occur while fetching logs from a log source.
///
/// # Examples
///
/// ```rust
/// use bridgescan::LogSourceError;
///
/// let error = LogSourceError::rejected("query returned more than 10000 results");
/// assert!(error.to_string().contains("10000"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum LogSourceError {
    /// The underlying `eth_getLogs` call failed.
    ///
    /// This covers transport failures, provider-side timeouts and the
    /// "block range too large" responses most RPC providers return.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the query that failed (e.g. "blocks 100-200 on mainnet")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The source refused the query without an underlying error value.
    #[error("Log query rejected: {reason}")]
    Rejected {
        /// Reason given by the source
        reason: String,
    },
}

impl LogSourceError {
    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LogSourceError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create a `Rejected` error with a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        LogSourceError::Rejected {
            reason: reason.into(),
        }
    }
}
