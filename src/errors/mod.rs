// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the bridgescan library.
//!
//! Each module has its own error type, and [`BridgeScanError`] wraps them all
//! for callers that don't need to tell the sources apart:
//!
//! - [`ScanError`] - range scanning; the only error a flow fetch can return
//! - [`LogSourceError`] - failures reported by a [`LogSource`](crate::LogSource)
//! - [`ClassifyError`] - why a log was skipped; recovered inside the classifier
//! - [`ConfigError`] - configuration and flow wiring
//!
//! # Examples
//!
//! ```rust,ignore
//! use bridgescan::{BridgeScanError, FlowFetcher};
//!
//! async fn run(fetcher: &FlowFetcher) -> Result<(), BridgeScanError> {
//!     let records = fetcher.fetch(19_000_000, 19_010_000).await?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

mod classify;
mod config;
mod scan;
mod source;

pub use classify::ClassifyError;
pub use config::ConfigError;
pub use scan::ScanError;
pub use source::LogSourceError;

/// Unified error type for all bridgescan operations.
///
/// All module-specific error types convert into `BridgeScanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum BridgeScanError {
    /// Error from a range scan.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Error from a log source used outside a scan.
    #[error("Log source error: {0}")]
    LogSource(#[from] LogSourceError),

    /// Error from classifying a single log.
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// Error from configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
