// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge event scanner with per-chain chunking
//!
//! [`RangeScanner`] binds a [`LogSource`] to a [`BridgeScanConfig`]: it looks up
//! the chain's base chunk size and delay, filters on the configured contract and
//! the `BridgeExecuted` signature, and runs the adaptive chunk loop from
//! [`chunked`](crate::events::chunked).
//!
//! # Examples
//!
//! ```rust,ignore
//! use bridgescan::{BridgeScanConfig, ProviderLogSource, RangeScanner};
//! use alloy_chains::{Chain, NamedChain};
//! use std::sync::Arc;
//!
//! let config = Arc::new(BridgeScanConfig::with_common_defaults(contract));
//! let scanner = RangeScanner::new(ProviderLogSource::new(provider), config);
//!
//! let logs = scanner
//!     .scan(Chain::from_named(NamedChain::Arbitrum), 200_000_000, 200_100_000)
//!     .await?;
//! ```

use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use tokio::sync::watch;
use tracing::{info, Instrument};

use crate::config::BridgeScanConfig;
use crate::errors::ScanError;
use crate::events::chunked::{scan_range, ScanStats};
use crate::events::definitions::BridgeExecuted;
use crate::events::source::{LogQuery, LogSource};
use crate::spans;
use crate::types::block_range::BlockRange;

/// Scans block ranges for `BridgeExecuted` logs
///
/// One scan issues one request at a time, in ascending block order. Scanners
/// hold no mutable state, so separate scans (on the same scanner or on
/// different ones) can run concurrently.
pub struct RangeScanner<S> {
    source: S,
    config: Arc<BridgeScanConfig>,
}

impl<S: LogSource> RangeScanner<S> {
    /// Create a new scanner
    ///
    /// # Arguments
    ///
    /// * `source` - Where logs are fetched from
    /// * `config` - Contract address and per-chain chunking
    pub fn new(source: S, config: Arc<BridgeScanConfig>) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &BridgeScanConfig {
        &self.config
    }

    /// Query sent to the log source for `chain`
    pub fn query(&self, chain: Chain) -> LogQuery {
        LogQuery {
            chain,
            contract: self.config.contract_address,
            topic0: BridgeExecuted::SIGNATURE_HASH,
        }
    }

    /// Fetch every `BridgeExecuted` log in `[from_block, to_block]` on `chain`
    ///
    /// Logs are ordered by chunk, then in the order the source returned them.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidRange`] if `from_block > to_block`
    /// - [`ScanError::Fetch`] if a chunk fails at the minimum shrink size.
    ///   Nothing fetched so far is returned.
    pub async fn scan(
        &self,
        chain: Chain,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, ScanError> {
        self.run(chain, from_block, to_block, None)
            .await
            .map(|(logs, _)| logs)
    }

    /// Like [`scan`](Self::scan), also returning request counters
    pub async fn scan_with_stats(
        &self,
        chain: Chain,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<(Vec<Log>, ScanStats), ScanError> {
        self.run(chain, from_block, to_block, None).await
    }

    /// Like [`scan`](Self::scan), stopping at the next chunk boundary once
    /// `cancel` holds `true`
    ///
    /// An in-flight request is never interrupted. A cancelled scan returns
    /// [`ScanError::Cancelled`] and no logs.
    pub async fn scan_cancellable(
        &self,
        chain: Chain,
        from_block: BlockNumber,
        to_block: BlockNumber,
        cancel: &watch::Receiver<bool>,
    ) -> Result<Vec<Log>, ScanError> {
        self.run(chain, from_block, to_block, Some(cancel))
            .await
            .map(|(logs, _)| logs)
    }

    async fn run(
        &self,
        chain: Chain,
        from_block: BlockNumber,
        to_block: BlockNumber,
        cancel: Option<&watch::Receiver<bool>>,
    ) -> Result<(Vec<Log>, ScanStats), ScanError> {
        let range = BlockRange::new(from_block, to_block)?;
        let plan = self.config.chunk_plan(chain);
        let query = self.query(chain);

        info!(
            chain = %chain,
            start_block = from_block,
            end_block = to_block,
            chunk_size = plan.chunk_size.as_u64(),
            num_chunks = plan.chunk_size.chunks_needed(from_block, to_block),
            "Starting bridge event scan"
        );

        let (logs, stats) = scan_range(&self.source, &query, range, &plan, cancel)
            .instrument(spans::scan(chain, from_block, to_block))
            .await?;

        info!(
            chain = %chain,
            total_logs = stats.logs,
            fetch_calls = stats.fetch_calls,
            shrinks = stats.shrinks,
            "Finished bridge event scan"
        );

        Ok((logs, stats))
    }
}
