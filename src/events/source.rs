// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Log retrieval seam
//!
//! The scanner never talks to an RPC endpoint directly. It asks a [`LogSource`]
//! for the logs of one contract and one event signature over a block window.
//! [`ProviderLogSource`] implements it for any Alloy provider; tests and other
//! transports can supply their own implementation.

use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::{Address, BlockNumber, B256};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use alloy_transport::TransportError;
use async_trait::async_trait;

use crate::errors::LogSourceError;

/// What a scan asks a log source for, apart from the block window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    /// Chain the logs live on
    pub chain: Chain,
    /// Emitting contract
    pub contract: Address,
    /// Event signature hash (topic0)
    pub topic0: B256,
}

/// Fetches logs for a contract and event signature over an inclusive block window
///
/// Implementations own their transport concerns (timeouts, retries, auth).
/// Any error they return is treated by the range scanner as a reason to shrink
/// the window and try again.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Returns logs emitted by `query.contract` with topic0 `query.topic0` in
    /// `[from_block, to_block]`, in the order the source reports them.
    async fn fetch_logs(
        &self,
        query: &LogQuery,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, LogSourceError>;
}

#[async_trait]
impl<T: LogSource + ?Sized> LogSource for Arc<T> {
    async fn fetch_logs(
        &self,
        query: &LogQuery,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, LogSourceError> {
        (**self).fetch_logs(query, from_block, to_block).await
    }
}

/// [`LogSource`] backed by an Alloy provider's `eth_getLogs`
///
/// # Example
///
/// ```rust,ignore
/// use bridgescan::ProviderLogSource;
/// use alloy_provider::ProviderBuilder;
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let source = ProviderLogSource::new(provider);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderLogSource<P> {
    provider: P,
}

impl<P> ProviderLogSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> LogSource for ProviderLogSource<P> {
    async fn fetch_logs(
        &self,
        query: &LogQuery,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, LogSourceError> {
        let filter = Filter::new()
            .address(query.contract)
            .event_signature(query.topic0)
            .from_block(from_block)
            .to_block(to_block);

        self.provider.get_logs(&filter).await.map_err(|e: TransportError| {
            LogSourceError::get_logs_failed(
                format!(
                    "blocks {from_block}-{to_block} on chain {}",
                    query.chain
                ),
                e,
            )
        })
    }
}
