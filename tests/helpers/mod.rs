// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for bridgescan integration tests
//!
//! Provides an in-memory log source and builders for `BridgeExecuted` logs so
//! scans can be exercised without a blockchain connection.

use std::sync::Mutex;

use alloy_primitives::{address, Address, BlockNumber, Bytes, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use bridgescan::{BridgeExecuted, LogQuery, LogSource, LogSourceError};

/// Contract address used by every test log
#[allow(dead_code)]
pub const CONTRACT: Address = address!("00000000000000000000000000000000000b41d6");

/// Target network id of the reference deployment
#[allow(dead_code)]
pub const TARGET_CHAIN_ID: u64 = 173;

type FailurePolicy = Box<dyn Fn(BlockNumber, BlockNumber) -> bool + Send + Sync>;

/// In-memory log source
///
/// Returns the stored logs whose block number falls in the requested window,
/// in insertion order. A failure policy decides which windows are rejected.
/// Every request is recorded.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockLogSource::new(logs).max_window(300);
/// let scanner = RangeScanner::new(source, config);
/// ```
pub struct MockLogSource {
    logs: Vec<Log>,
    fail_when: FailurePolicy,
    calls: Mutex<Vec<(BlockNumber, BlockNumber)>>,
}

#[allow(dead_code)]
impl MockLogSource {
    /// A source that accepts every window
    pub fn new(logs: Vec<Log>) -> Self {
        Self {
            logs,
            fail_when: Box::new(|_, _| false),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reject windows for which `policy(from_block, to_block)` is true
    pub fn failing_when<F>(mut self, policy: F) -> Self
    where
        F: Fn(BlockNumber, BlockNumber) -> bool + Send + Sync + 'static,
    {
        self.fail_when = Box::new(policy);
        self
    }

    /// Reject windows wider than `width` blocks
    pub fn max_window(self, width: u64) -> Self {
        self.failing_when(move |from, to| to - from + 1 > width)
    }

    /// Reject every window
    pub fn always_failing(self) -> Self {
        self.failing_when(|_, _| true)
    }

    /// Windows requested so far, failed ones included
    pub fn calls(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.calls.lock().unwrap().clone()
    }

    /// Windows that were answered successfully
    pub fn successful_calls(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.calls()
            .into_iter()
            .filter(|(from, to)| !(self.fail_when)(*from, *to))
            .collect()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn fetch_logs(
        &self,
        _query: &LogQuery,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, LogSourceError> {
        self.calls.lock().unwrap().push((from_block, to_block));

        if (self.fail_when)(from_block, to_block) {
            return Err(LogSourceError::rejected(format!(
                "query returned more than 10000 results for {from_block}-{to_block}"
            )));
        }

        Ok(self
            .logs
            .iter()
            .filter(|log| {
                log.block_number
                    .is_some_and(|block| from_block <= block && block <= to_block)
            })
            .cloned()
            .collect())
    }
}

/// A `BridgeExecuted` event with fixed parties and the given routing payload
#[allow(dead_code)]
pub fn bridge_event(ext_data: &[u8], amount: u64) -> BridgeExecuted {
    BridgeExecuted {
        sender: address!("000000000000000000000000000000000000a11c"),
        recipient: address!("0000000000000000000000000000000000000b0b"),
        inputToken: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
        outputToken: address!("dac17f958d2ee523a2206206994597c13d831ec7"),
        inputAmount: U256::from(amount),
        extData: Bytes::copy_from_slice(ext_data),
    }
}

/// Wrap an event in a log envelope at `block`
///
/// The transaction hash is derived from the block number and `log_index`.
#[allow(dead_code)]
pub fn log_at(block: BlockNumber, log_index: u64, event: &BridgeExecuted) -> Log {
    let mut tx_seed = [0u8; 16];
    tx_seed[..8].copy_from_slice(&block.to_be_bytes());
    tx_seed[8..].copy_from_slice(&log_index.to_be_bytes());

    Log {
        inner: alloy_primitives::Log {
            address: CONTRACT,
            data: event.encode_log_data(),
        },
        block_hash: Some(B256::left_padding_from(&block.to_be_bytes())),
        block_number: Some(block),
        block_timestamp: None,
        transaction_hash: Some(B256::left_padding_from(&tx_seed)),
        transaction_index: Some(0),
        log_index: Some(log_index),
        removed: false,
    }
}

/// A bridge log at `block` with routing payload `ext_data`
#[allow(dead_code)]
pub fn bridge_log(block: BlockNumber, ext_data: &[u8]) -> Log {
    log_at(block, 0, &bridge_event(ext_data, 1_000_000))
}
