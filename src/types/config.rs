// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values
//!
//! These types keep chunk-size limits from being confused with block numbers.

use serde::{Deserialize, Serialize};

/// Maximum number of blocks requested in a single log query
///
/// This is the base chunk size of a scan. Different chains get different
/// values depending on how strict their log-query endpoints are.
///
/// Typical values:
/// - Conservative: 1000 blocks (default for chains without an entry)
/// - Default: 2000 blocks
/// - Moderate: 5000 blocks
/// - Generous: 10000 blocks (fast chains with robust RPC, e.g. Arbitrum)
///
/// # Examples
///
/// ```
/// use bridgescan::MaxBlockRange;
///
/// assert_eq!(MaxBlockRange::CONSERVATIVE.as_u64(), 1000);
/// assert_eq!(MaxBlockRange::GENEROUS.as_u64(), 10000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Works on most chains
    pub const DEFAULT: Self = Self(2000);

    /// Chains with good RPC support
    pub const MODERATE: Self = Self(5000);

    /// Chains with generous RPC limits
    pub const GENEROUS: Self = Self(10000);

    /// Rate-limited RPCs and chains absent from the chunk-size table
    pub const CONSERVATIVE: Self = Self(1000);

    /// Create a new max block range
    ///
    /// A value of zero is raised to one block.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridgescan::MaxBlockRange;
    ///
    /// assert_eq!(MaxBlockRange::new(3000).as_u64(), 3000);
    /// assert_eq!(MaxBlockRange::new(0).as_u64(), 1);
    /// ```
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Calculate number of full-size chunks needed to cover a range
    ///
    /// # Examples
    ///
    /// ```
    /// use bridgescan::MaxBlockRange;
    ///
    /// let range = MaxBlockRange::new(1000);
    /// assert_eq!(range.chunks_needed(0, 2500), 3); // 0-999, 1000-1999, 2000-2500
    /// assert_eq!(range.chunks_needed(10, 5), 0);
    /// ```
    pub fn chunks_needed(&self, start: u64, end: u64) -> u64 {
        if end < start {
            return 0;
        }
        // Written so that a range spanning all of u64 doesn't overflow.
        (end - start) / self.0 + 1
    }

    /// Last block of the chunk starting at `start`, capped at `end`
    ///
    /// # Examples
    ///
    /// ```
    /// use bridgescan::MaxBlockRange;
    ///
    /// let range = MaxBlockRange::new(1000);
    /// assert_eq!(range.chunk_end(0, 2500), 999);
    /// assert_eq!(range.chunk_end(2000, 2500), 2500);
    /// ```
    pub fn chunk_end(&self, start: u64, end: u64) -> u64 {
        start.saturating_add(self.0 - 1).min(end)
    }
}

impl From<u64> for MaxBlockRange {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<MaxBlockRange> for u64 {
    fn from(value: MaxBlockRange) -> Self {
        value.0
    }
}

impl std::fmt::Display for MaxBlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}
