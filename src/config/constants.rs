// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known constants
//!
//! Centralizes the fixed numbers the scanner and classifier depend on.

use alloy_primitives::BlockNumber;

/// Numeric id of the target network in the reference deployment
pub const REFERENCE_TARGET_CHAIN_ID: u64 = 173;

/// Chunks of this many blocks or fewer are not shrunk again; their failure ends the scan
pub const MIN_SHRINK_RANGE: BlockNumber = 50;

/// Smallest accepted shrink floor
///
/// Halving from the same start maps a two-block chunk onto itself, so any floor
/// below two would retry the same chunk forever.
pub const MIN_SHRINK_FLOOR: BlockNumber = 2;
