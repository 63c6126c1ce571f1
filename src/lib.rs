// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge flow scanning for EVM chains.
//!
//! Scans a chain's history for `BridgeExecuted` events from one contract and
//! classifies each as an inflow to, or an outflow from, a target network.
//!
//! - [`RangeScanner`] walks a block range in per-chain chunks and halves any
//!   chunk the log source rejects, down to a 50-block floor.
//! - [`EventClassifier`] decodes the event and its `c=<chain id>` routing key.
//! - [`FlowFetcher`] and [`BridgeFlows`] put the two together per chain.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
mod flows;
mod spans;
pub mod types;

pub use config::{constants, BridgeScanConfig, BridgeScanConfigBuilder, ChainConfig};
pub use errors::*;
pub use events::{
    fetch_logs_adaptive, BridgeExecuted, ChunkPlan, EventClassifier, LogQuery, LogSource,
    ProviderLogSource, RangeScanner, ScanStats,
};
pub use flows::{BridgeFlows, BridgeFlowsBuilder, FlowFetcher};
pub use types::block_range::BlockRange;
pub use types::config::MaxBlockRange;
pub use types::transfer::{Direction, TransferRecord};
