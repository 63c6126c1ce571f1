// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types used across bridgescan.
//!
//! - Block ranges requested by callers and the chunk-size limits applied to them
//! - Transfer records and the scan direction that produces them

pub mod block_range;
pub mod config;
pub mod transfer;

// Note: Public types are re-exported from lib.rs, not here
