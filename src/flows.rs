// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain flow fetchers for the accounting pipeline
//!
//! Each scanned chain gets one [`FlowFetcher`]: source chains in inflow mode
//! (transfers headed to the target network) and the target network itself in
//! outflow mode (transfers leaving it). [`BridgeFlows`] holds the full set.
//!
//! # Example
//!
//! ```rust,ignore
//! use bridgescan::{BridgeFlows, BridgeScanConfig, ProviderLogSource};
//! use alloy_chains::{Chain, NamedChain};
//!
//! let flows = BridgeFlows::builder(BridgeScanConfig::with_common_defaults(contract))
//!     .source_chain(Chain::from_named(NamedChain::Mainnet), ProviderLogSource::new(mainnet))
//!     .source_chain(Chain::from_named(NamedChain::Arbitrum), ProviderLogSource::new(arbitrum))
//!     .target_chain(ProviderLogSource::new(target))
//!     .build()?;
//!
//! let inflows = flows
//!     .get(Chain::from_named(NamedChain::Mainnet))
//!     .expect("registered above")
//!     .fetch(19_000_000, 19_001_000)
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use futures::future::join_all;
use tracing::{info, Instrument};

use crate::config::BridgeScanConfig;
use crate::errors::{ConfigError, ScanError};
use crate::events::classifier::EventClassifier;
use crate::events::scanner::RangeScanner;
use crate::events::source::LogSource;
use crate::spans;
use crate::types::block_range::BlockRange;
use crate::types::transfer::{Direction, TransferRecord};

/// Fetches classified transfer records for one chain
pub struct FlowFetcher {
    chain: Chain,
    direction: Direction,
    scanner: RangeScanner<Arc<dyn LogSource>>,
    classifier: EventClassifier,
}

impl FlowFetcher {
    /// Create a fetcher for `chain` classifying in `direction`
    pub fn new(
        chain: Chain,
        direction: Direction,
        source: Arc<dyn LogSource>,
        config: Arc<BridgeScanConfig>,
    ) -> Self {
        let classifier = EventClassifier::new(config.target_chain_id);
        Self {
            chain,
            direction,
            scanner: RangeScanner::new(source, config),
            classifier,
        }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Transfer records in `[from_block, to_block]`, ordered by block
    ///
    /// Either the whole range is scanned or the call fails; there are no
    /// partial results. Retrying a failed range is safe.
    pub async fn fetch(
        &self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<TransferRecord>, ScanError> {
        async {
            let logs = self.scanner.scan(self.chain, from_block, to_block).await?;
            let records = self
                .classifier
                .classify_all(self.chain, &logs, self.direction);

            info!(
                chain = %self.chain,
                direction = %self.direction,
                logs_count = logs.len(),
                records_count = records.len(),
                "Fetched bridge flow"
            );

            Ok::<_, ScanError>(records)
        }
        .instrument(spans::fetch_flow(
            self.chain,
            self.direction,
            from_block,
            to_block,
        ))
        .await
    }
}

/// One inflow fetcher per source chain plus the target chain's outflow fetcher
pub struct BridgeFlows {
    target_chain: Chain,
    fetchers: HashMap<Chain, FlowFetcher>,
}

impl BridgeFlows {
    pub fn builder(config: BridgeScanConfig) -> BridgeFlowsBuilder {
        BridgeFlowsBuilder {
            config,
            sources: Vec::new(),
            target: None,
        }
    }

    /// Fetcher registered for `chain`
    pub fn get(&self, chain: Chain) -> Option<&FlowFetcher> {
        self.fetchers.get(&chain)
    }

    /// The target chain's outflow fetcher
    pub fn target(&self) -> &FlowFetcher {
        &self.fetchers[&self.target_chain]
    }

    /// Inflow fetchers, one per source chain
    pub fn sources(&self) -> impl Iterator<Item = &FlowFetcher> {
        self.fetchers
            .values()
            .filter(|fetcher| fetcher.direction == Direction::Inflow)
    }

    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        self.fetchers.keys().copied()
    }

    /// Fetch every chain that has an entry in `ranges`, concurrently
    ///
    /// Block numbers differ per chain, so each chain gets its own range. Chains
    /// without a fetcher are ignored. Each result stands alone; one chain
    /// failing does not affect the others.
    pub async fn fetch_all(
        &self,
        ranges: &HashMap<Chain, BlockRange>,
    ) -> HashMap<Chain, Result<Vec<TransferRecord>, ScanError>> {
        let scans = ranges.iter().filter_map(|(chain, range)| {
            let fetcher = self.fetchers.get(chain)?;
            Some(async move {
                let result = fetcher.fetch(range.from_block(), range.to_block()).await;
                (*chain, result)
            })
        });

        join_all(scans).await.into_iter().collect()
    }
}

/// Builder for [`BridgeFlows`]
pub struct BridgeFlowsBuilder {
    config: BridgeScanConfig,
    sources: Vec<(Chain, Arc<dyn LogSource>)>,
    target: Option<Arc<dyn LogSource>>,
}

impl BridgeFlowsBuilder {
    /// Register a source chain, scanned in inflow mode
    pub fn source_chain(mut self, chain: Chain, source: impl LogSource + 'static) -> Self {
        let source: Arc<dyn LogSource> = Arc::new(source);
        self.sources.push((chain, source));
        self
    }

    /// Register the target chain, scanned in outflow mode
    pub fn target_chain(mut self, source: impl LogSource + 'static) -> Self {
        self.target = Some(Arc::new(source));
        self
    }

    /// Build the fetchers
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingTargetSource`] if no target source was registered
    /// - [`ConfigError::DuplicateChain`] if a chain was registered twice or a
    ///   source chain is the target chain
    pub fn build(self) -> Result<BridgeFlows, ConfigError> {
        let config = Arc::new(self.config);
        let target_chain = config.target_chain();

        let target_source = self
            .target
            .ok_or(ConfigError::MissingTargetSource {
                chain: target_chain,
            })?;

        let mut fetchers = HashMap::with_capacity(self.sources.len() + 1);
        fetchers.insert(
            target_chain,
            FlowFetcher::new(
                target_chain,
                Direction::Outflow,
                target_source,
                Arc::clone(&config),
            ),
        );

        for (chain, source) in self.sources {
            if fetchers.contains_key(&chain) {
                return Err(ConfigError::DuplicateChain { chain });
            }
            fetchers.insert(
                chain,
                FlowFetcher::new(chain, Direction::Inflow, source, Arc::clone(&config)),
            );
        }

        Ok(BridgeFlows {
            target_chain,
            fetchers,
        })
    }
}
