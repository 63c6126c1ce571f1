// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Inclusive block ranges requested by callers.

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

use crate::errors::ScanError;

/// An inclusive `[from_block, to_block]` interval with `from_block <= to_block`
///
/// # Examples
///
/// ```
/// use bridgescan::BlockRange;
///
/// let range = BlockRange::new(100, 199).unwrap();
/// assert_eq!(range.len(), 100);
/// assert!(range.contains(150));
/// assert!(BlockRange::new(200, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBlockRange")]
pub struct BlockRange {
    from_block: BlockNumber,
    to_block: BlockNumber,
}

/// Unvalidated wire form; deserialization goes through [`BlockRange::new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlockRange {
    from_block: BlockNumber,
    to_block: BlockNumber,
}

impl TryFrom<RawBlockRange> for BlockRange {
    type Error = ScanError;

    fn try_from(raw: RawBlockRange) -> Result<Self, Self::Error> {
        Self::new(raw.from_block, raw.to_block)
    }
}

impl BlockRange {
    /// Create a range, rejecting `from_block > to_block`.
    pub fn new(from_block: BlockNumber, to_block: BlockNumber) -> Result<Self, ScanError> {
        if from_block > to_block {
            return Err(ScanError::invalid_range(from_block, to_block));
        }
        Ok(Self {
            from_block,
            to_block,
        })
    }

    /// First block (inclusive)
    pub const fn from_block(&self) -> BlockNumber {
        self.from_block
    }

    /// Last block (inclusive)
    pub const fn to_block(&self) -> BlockNumber {
        self.to_block
    }

    /// Number of blocks in the range, saturating at `u64::MAX`
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> u64 {
        (self.to_block - self.from_block).saturating_add(1)
    }

    /// Whether `block` falls inside the range
    pub const fn contains(&self, block: BlockNumber) -> bool {
        self.from_block <= block && block <= self.to_block
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from_block, self.to_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_range() {
        let range = BlockRange::new(42, 42).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contains(42));
        assert!(!range.contains(43));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = BlockRange::new(10, 9).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidRange {
                from_block: 10,
                to_block: 9
            }
        ));
    }

    #[test]
    fn test_full_range_len_saturates() {
        let range = BlockRange::new(0, u64::MAX).unwrap();
        assert_eq!(range.len(), u64::MAX);
    }

    #[test]
    fn test_serializes_camel_case() {
        let range = BlockRange::new(1, 2).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"fromBlock":1,"toBlock":2}"#);
    }

    #[test]
    fn test_deserialize_validates_order() {
        let range: BlockRange = serde_json::from_str(r#"{"fromBlock":5,"toBlock":10}"#).unwrap();
        assert_eq!(range, BlockRange::new(5, 10).unwrap());
        assert_eq!(range.len(), 6);

        let err = serde_json::from_str::<BlockRange>(r#"{"fromBlock":10,"toBlock":5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid block range"));
    }
}
