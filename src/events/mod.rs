// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge event scanning and classification.
//!
//! This module handles:
//! - The `BridgeExecuted` event definition
//! - The [`LogSource`] seam and its Alloy provider implementation
//! - Adaptive chunked log fetching (halving chunks the source rejects)
//! - The per-chain [`RangeScanner`]
//! - Routing payload parsing and inflow/outflow classification

pub mod chunked;
pub mod classifier;
pub mod definitions;
pub mod routing;
pub mod scanner;
pub mod source;

pub use chunked::{fetch_logs_adaptive, ChunkPlan, ScanStats};
pub use classifier::EventClassifier;
pub use definitions::BridgeExecuted;
pub use routing::{decode_payload_text, parse_destination_chain_id, TextDecoding};
pub use scanner::RangeScanner;
pub use source::{LogQuery, LogSource, ProviderLogSource};
