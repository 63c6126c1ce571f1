// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for bridgescan operations
//!
//! Holds the fixed contract address and target chain id, the per-chain base
//! chunk sizes used by the range scanner, and optional delays between chunks.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use bridgescan::BridgeScanConfig;
//! use alloy_chains::{Chain, NamedChain};
//! use alloy_primitives::Address;
//!
//! let config = BridgeScanConfig::with_common_defaults(Address::ZERO);
//! assert_eq!(config.get_max_block_range(Chain::from_named(NamedChain::Arbitrum)).as_u64(), 10_000);
//! assert_eq!(config.get_max_block_range(Chain::from_id(173)).as_u64(), 1_000);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use bridgescan::BridgeScanConfigBuilder;
//! use alloy_chains::{Chain, NamedChain};
//! use alloy_primitives::Address;
//! use std::time::Duration;
//!
//! let config = BridgeScanConfigBuilder::with_defaults(Address::ZERO)
//!     .max_block_range(500)
//!     .chain_rate_limit(Chain::from_named(NamedChain::Base), Duration::from_millis(100))
//!     .build();
//! ```

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::{Chain, NamedChain};
use alloy_primitives::{Address, BlockNumber};

use crate::events::chunked::ChunkPlan;
use crate::types::config::MaxBlockRange;

pub mod constants;

use constants::{MIN_SHRINK_FLOOR, MIN_SHRINK_RANGE, REFERENCE_TARGET_CHAIN_ID};

/// Configuration for bridgescan operations
///
/// Immutable once built; share it between scanners with `Arc`.
/// Use [`BridgeScanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct BridgeScanConfig {
    /// Contract emitting the `BridgeExecuted` event (same address on every chain)
    pub contract_address: Address,

    /// Numeric id of the network inflows go to and outflows leave from
    /// Default: 173
    pub target_chain_id: u64,

    /// Base chunk size for chains without an override
    /// Default: 1000
    pub max_block_range: MaxBlockRange,

    /// Chunks of at most this many blocks are not shrunk further on failure
    /// Default: 50
    pub min_shrink_range: BlockNumber,

    /// Delay between chunk requests
    /// Default: None (no delay)
    pub rate_limit_delay: Option<Duration>,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<Chain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Override base chunk size for this chain
    pub max_block_range: Option<MaxBlockRange>,

    /// Override delay between chunk requests for this chain
    pub rate_limit_delay: Option<Duration>,
}

impl ChainConfig {
    fn with_max_block_range(max: MaxBlockRange) -> Self {
        Self {
            max_block_range: Some(max),
            rate_limit_delay: None,
        }
    }
}

impl BridgeScanConfig {
    /// Create config with the per-chain chunk-size table for common chains
    ///
    /// Chains absent from the table use [`MaxBlockRange::CONSERVATIVE`].
    /// BNB Smart Chain's public endpoints are the strictest; Avalanche's
    /// C-chain caps `eth_getLogs` at 2048 blocks.
    pub fn with_common_defaults(contract_address: Address) -> Self {
        let mut config = Self::minimal(contract_address);

        let table = [
            (NamedChain::Mainnet, MaxBlockRange::DEFAULT),
            (NamedChain::Arbitrum, MaxBlockRange::GENEROUS),
            (NamedChain::Optimism, MaxBlockRange::MODERATE),
            (NamedChain::Base, MaxBlockRange::MODERATE),
            (NamedChain::Polygon, MaxBlockRange::DEFAULT),
            (NamedChain::Avalanche, MaxBlockRange::new(2048)),
            (NamedChain::BinanceSmartChain, MaxBlockRange::new(500)),
            (NamedChain::Linea, MaxBlockRange::CONSERVATIVE),
        ];

        for (chain, max) in table {
            config.set_chain_override(
                Chain::from_named(chain),
                ChainConfig::with_max_block_range(max),
            );
        }

        config
    }

    /// Create config with no chain-specific entries and no delays
    ///
    /// Every chain scans with the conservative default chunk size.
    pub fn minimal(contract_address: Address) -> Self {
        Self {
            contract_address,
            target_chain_id: REFERENCE_TARGET_CHAIN_ID,
            max_block_range: MaxBlockRange::CONSERVATIVE,
            min_shrink_range: MIN_SHRINK_RANGE,
            rate_limit_delay: None,
            chain_overrides: HashMap::new(),
        }
    }

    /// The target network as a [`Chain`]
    pub fn target_chain(&self) -> Chain {
        Chain::from_id(self.target_chain_id)
    }

    /// Get effective base chunk size for a specific chain
    ///
    /// Returns the chain-specific override if set, otherwise the global default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bridgescan::{BridgeScanConfig, ChainConfig, MaxBlockRange};
    /// use alloy_chains::Chain;
    /// use alloy_primitives::Address;
    ///
    /// let mut config = BridgeScanConfig::minimal(Address::ZERO);
    /// config.set_chain_override(
    ///     Chain::from_id(10),
    ///     ChainConfig {
    ///         max_block_range: Some(MaxBlockRange::new(3000)),
    ///         rate_limit_delay: None,
    ///     },
    /// );
    ///
    /// assert_eq!(config.get_max_block_range(Chain::from_id(10)), MaxBlockRange::new(3000));
    /// assert_eq!(config.get_max_block_range(Chain::from_id(1)), MaxBlockRange::CONSERVATIVE);
    /// ```
    pub fn get_max_block_range(&self, chain: Chain) -> MaxBlockRange {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.max_block_range)
            .unwrap_or(self.max_block_range)
    }

    /// Get effective delay between chunks for a specific chain
    pub fn get_rate_limit_delay(&self, chain: Chain) -> Option<Duration> {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.rate_limit_delay)
            .or(self.rate_limit_delay)
    }

    /// Chunking parameters for scanning `chain`
    pub fn chunk_plan(&self, chain: Chain) -> ChunkPlan {
        ChunkPlan {
            chunk_size: self.get_max_block_range(chain),
            min_shrink_range: self.min_shrink_range.max(MIN_SHRINK_FLOOR),
            rate_limit_delay: self.get_rate_limit_delay(chain),
        }
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: Chain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`BridgeScanConfig`]
///
/// # Example
///
/// ```rust
/// use bridgescan::BridgeScanConfigBuilder;
/// use alloy_chains::Chain;
/// use alloy_primitives::Address;
///
/// let config = BridgeScanConfigBuilder::new(Address::ZERO)
///     .target_chain_id(173)
///     .chain_max_blocks(Chain::from_id(1), 2_000)
///     .build();
///
/// assert_eq!(config.target_chain(), Chain::from_id(173));
/// ```
pub struct BridgeScanConfigBuilder {
    config: BridgeScanConfig,
}

impl BridgeScanConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new(contract_address: Address) -> Self {
        Self {
            config: BridgeScanConfig::minimal(contract_address),
        }
    }

    /// Start with the common per-chain chunk-size table
    pub fn with_defaults(contract_address: Address) -> Self {
        Self {
            config: BridgeScanConfig::with_common_defaults(contract_address),
        }
    }

    /// Set the target network id
    pub fn target_chain_id(mut self, chain_id: u64) -> Self {
        self.config.target_chain_id = chain_id;
        self
    }

    /// Set the default base chunk size for chains without an override
    pub fn max_block_range(mut self, max: u64) -> Self {
        self.config.max_block_range = MaxBlockRange::new(max);
        self
    }

    /// Set the shrink floor
    ///
    /// Values below two are raised to two when the scan runs.
    pub fn min_shrink_range(mut self, blocks: BlockNumber) -> Self {
        self.config.min_shrink_range = blocks;
        self
    }

    /// Set global delay between chunk requests
    pub fn rate_limit_delay(mut self, delay: Duration) -> Self {
        self.config.rate_limit_delay = Some(delay);
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: Chain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: set delay between chunks for a specific chain
    pub fn chain_rate_limit(mut self, chain: Chain, delay: Duration) -> Self {
        let existing = self.config.chain_overrides.remove(&chain);
        let chain_config = ChainConfig {
            max_block_range: existing.and_then(|c| c.max_block_range),
            rate_limit_delay: Some(delay),
        };
        self.config.set_chain_override(chain, chain_config);
        self
    }

    /// Convenience: set base chunk size for a specific chain
    pub fn chain_max_blocks(mut self, chain: Chain, max: u64) -> Self {
        let existing = self.config.chain_overrides.remove(&chain);
        let chain_config = ChainConfig {
            max_block_range: Some(MaxBlockRange::new(max)),
            rate_limit_delay: existing.and_then(|c| c.rate_limit_delay),
        };
        self.config.set_chain_override(chain, chain_config);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> BridgeScanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(chain: NamedChain) -> Chain {
        Chain::from_named(chain)
    }

    #[test]
    fn test_default_table() {
        let config = BridgeScanConfig::with_common_defaults(Address::ZERO);

        assert_eq!(
            config.get_max_block_range(named(NamedChain::Arbitrum)),
            MaxBlockRange::GENEROUS
        );
        assert_eq!(
            config.get_max_block_range(named(NamedChain::BinanceSmartChain)),
            MaxBlockRange::new(500)
        );
        // Target chain is not in the table
        assert_eq!(
            config.get_max_block_range(config.target_chain()),
            MaxBlockRange::CONSERVATIVE
        );
        assert_eq!(config.target_chain_id, 173);
        assert_eq!(config.min_shrink_range, 50);
    }

    #[test]
    fn test_minimal_config_has_no_overrides() {
        let config = BridgeScanConfig::minimal(Address::ZERO);

        assert!(config.chain_overrides.is_empty());
        assert_eq!(
            config.get_max_block_range(named(NamedChain::Arbitrum)),
            MaxBlockRange::CONSERVATIVE
        );
        assert_eq!(config.get_rate_limit_delay(named(NamedChain::Base)), None);
    }

    #[test]
    fn test_chain_config_preserves_existing() {
        let chain = named(NamedChain::Polygon);
        let config = BridgeScanConfigBuilder::new(Address::ZERO)
            .chain_max_blocks(chain, 3000)
            .chain_rate_limit(chain, Duration::from_millis(100))
            .build();

        assert_eq!(config.get_max_block_range(chain), MaxBlockRange::new(3000));
        assert_eq!(
            config.get_rate_limit_delay(chain),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_chain_override_global_rate_limit() {
        let config = BridgeScanConfigBuilder::new(Address::ZERO)
            .rate_limit_delay(Duration::from_millis(500))
            .chain_rate_limit(named(NamedChain::Base), Duration::from_millis(250))
            .build();

        assert_eq!(
            config.get_rate_limit_delay(named(NamedChain::Base)),
            Some(Duration::from_millis(250))
        );
        assert_eq!(
            config.get_rate_limit_delay(named(NamedChain::Mainnet)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_chunk_plan_clamps_shrink_floor() {
        let config = BridgeScanConfigBuilder::new(Address::ZERO)
            .min_shrink_range(0)
            .build();

        let plan = config.chunk_plan(named(NamedChain::Mainnet));
        assert_eq!(plan.min_shrink_range, MIN_SHRINK_FLOOR);
        assert_eq!(plan.chunk_size, MaxBlockRange::CONSERVATIVE);
    }
}
