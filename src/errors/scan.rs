// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for range scanning.

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;

use super::LogSourceError;

/// Errors that can end a range scan.
///
/// A scan either covers the whole requested range or fails with one of these.
/// Logs fetched before the failure are discarded.
///
/// # Examples
///
/// ```rust,ignore
/// use bridgescan::{RangeScanner, ScanError};
///
/// match scanner.scan(chain, 1_000, 2_000).await {
///     Ok(logs) => println!("{} logs", logs.len()),
///     Err(ScanError::Fetch { from_block, to_block, .. }) => {
///         eprintln!("blocks {from_block}-{to_block} unavailable, retry later");
///     }
///     Err(e) => eprintln!("scan failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The requested range has `from_block > to_block`.
    #[error("Invalid block range: from_block {from_block} is after to_block {to_block}")]
    InvalidRange {
        /// Requested first block
        from_block: BlockNumber,
        /// Requested last block
        to_block: BlockNumber,
    },

    /// A chunk kept failing after it was shrunk to the minimum size.
    #[error("Failed to fetch logs on chain {chain} for blocks {from_block}-{to_block}")]
    Fetch {
        /// Chain being scanned
        chain: Chain,
        /// First block of the last chunk attempted
        from_block: BlockNumber,
        /// Last block of the last chunk attempted
        to_block: BlockNumber,
        /// Error returned by the log source for that chunk
        #[source]
        source: LogSourceError,
    },

    /// The scan was cancelled at a chunk boundary.
    #[error("Scan on chain {chain} cancelled before block {next_block}")]
    Cancelled {
        /// Chain being scanned
        chain: Chain,
        /// First block that was not scanned
        next_block: BlockNumber,
    },
}

impl ScanError {
    /// Create an `InvalidRange` error.
    pub fn invalid_range(from_block: BlockNumber, to_block: BlockNumber) -> Self {
        ScanError::InvalidRange {
            from_block,
            to_block,
        }
    }

    /// Create a `Fetch` error for a chunk that could not be shrunk further.
    pub fn fetch(
        chain: Chain,
        from_block: BlockNumber,
        to_block: BlockNumber,
        source: LogSourceError,
    ) -> Self {
        ScanError::Fetch {
            chain,
            from_block,
            to_block,
            source,
        }
    }
}
