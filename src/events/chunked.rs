// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Adaptive chunked log fetching
//!
//! Walks an inclusive block range in chunks of at most `chunk_size` blocks.
//! When the log source rejects a chunk, the chunk is halved from the same start
//! block and retried until it succeeds or its width is at or below the shrink
//! floor, at which point the error ends the scan. After a shrunk chunk succeeds
//! the walk resumes right after it with a fresh full-size chunk, so the part of
//! the original chunk that was cut off is still covered.
//!
//! Chunk sizes never grow back above `chunk_size`, and a shrink only affects the
//! chunk it happened in.
//!
//! # Example
//!
//! ```rust,ignore
//! use bridgescan::{fetch_logs_adaptive, BlockRange, ChunkPlan, LogQuery, MaxBlockRange};
//!
//! let query = LogQuery { chain, contract, topic0: BridgeExecuted::SIGNATURE_HASH };
//! let range = BlockRange::new(19_000_000, 19_100_000)?;
//!
//! // 2000-block chunks, halved on failure down to 50 blocks
//! let logs = fetch_logs_adaptive(&source, &query, range, &ChunkPlan::new(MaxBlockRange::DEFAULT)).await?;
//! ```

use std::time::Duration;

use alloy_primitives::BlockNumber;
use alloy_rpc_types::Log;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, error, info, warn, Instrument};

use crate::config::constants::{MIN_SHRINK_FLOOR, MIN_SHRINK_RANGE};
use crate::errors::ScanError;
use crate::events::source::{LogQuery, LogSource};
use crate::spans;
use crate::types::block_range::BlockRange;
use crate::types::config::MaxBlockRange;

/// Chunking parameters for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Base chunk size
    pub chunk_size: MaxBlockRange,
    /// Chunks this wide or narrower are not shrunk again
    pub min_shrink_range: BlockNumber,
    /// Pause between chunks
    pub rate_limit_delay: Option<Duration>,
}

impl ChunkPlan {
    /// Plan with the default 50-block shrink floor and no delay
    pub fn new(chunk_size: MaxBlockRange) -> Self {
        Self {
            chunk_size,
            min_shrink_range: MIN_SHRINK_RANGE,
            rate_limit_delay: None,
        }
    }

    pub fn with_min_shrink_range(mut self, blocks: BlockNumber) -> Self {
        self.min_shrink_range = blocks.max(MIN_SHRINK_FLOOR);
        self
    }

    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = Some(delay);
        self
    }

    /// End block of the retry after `[start, end]` failed
    ///
    /// Returns `None` when the chunk is at or below the shrink floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridgescan::{ChunkPlan, MaxBlockRange};
    ///
    /// let plan = ChunkPlan::new(MaxBlockRange::CONSERVATIVE);
    /// assert_eq!(plan.shrink(0, 999), Some(500));
    /// assert_eq!(plan.shrink(100, 150), Some(125));
    /// assert_eq!(plan.shrink(100, 149), None); // 50 blocks
    /// ```
    pub fn shrink(&self, start: BlockNumber, end: BlockNumber) -> Option<BlockNumber> {
        let width = (end - start).saturating_add(1);
        if width <= self.min_shrink_range.max(MIN_SHRINK_FLOOR) {
            return None;
        }
        Some(start + width / 2)
    }
}

/// Counters collected during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Requests sent to the log source, failed ones included
    pub fetch_calls: u64,
    /// Failed requests that were retried with a smaller chunk
    pub shrinks: u64,
    /// Chunks that succeeded
    pub chunks: u64,
    /// Logs returned
    pub logs: usize,
}

/// Fetch all logs matching `query` in `range`, shrinking chunks on failure
///
/// Standalone version of the range scanner that needs no
/// [`BridgeScanConfig`](crate::BridgeScanConfig).
///
/// # Errors
///
/// Returns [`ScanError::Fetch`] when a chunk fails at or below the shrink floor.
/// Logs fetched before the failure are dropped.
pub async fn fetch_logs_adaptive<S: LogSource + ?Sized>(
    source: &S,
    query: &LogQuery,
    range: BlockRange,
    plan: &ChunkPlan,
) -> Result<Vec<Log>, ScanError> {
    scan_range(source, query, range, plan, None)
        .await
        .map(|(logs, _)| logs)
}

pub(crate) async fn scan_range<S: LogSource + ?Sized>(
    source: &S,
    query: &LogQuery,
    range: BlockRange,
    plan: &ChunkPlan,
    cancel: Option<&watch::Receiver<bool>>,
) -> Result<(Vec<Log>, ScanStats), ScanError> {
    let chain = query.chain;
    let mut all_logs = Vec::new();
    let mut stats = ScanStats::default();
    let mut next_start = range.from_block();

    loop {
        if cancel.is_some_and(|rx| *rx.borrow()) {
            info!(chain = %chain, next_block = next_start, "Scan cancelled");
            return Err(ScanError::Cancelled {
                chain,
                next_block: next_start,
            });
        }

        let start = next_start;
        let mut end = plan.chunk_size.chunk_end(start, range.to_block());

        loop {
            stats.fetch_calls += 1;

            let fetched = source
                .fetch_logs(query, start, end)
                .instrument(spans::fetch_chunk(chain, start, end))
                .await;

            match fetched {
                Ok(logs) => {
                    debug!(
                        chain = %chain,
                        start_block = start,
                        end_block = end,
                        logs_count = logs.len(),
                        "Fetched logs for chunk"
                    );
                    all_logs.extend(logs);
                    break;
                }
                Err(e) => match plan.shrink(start, end) {
                    Some(shrunk_end) => {
                        warn!(
                            ?e,
                            chain = %chain,
                            start_block = start,
                            end_block = end,
                            shrunk_end_block = shrunk_end,
                            "Error fetching logs, retrying with a smaller chunk"
                        );
                        stats.shrinks += 1;
                        end = shrunk_end;
                    }
                    None => {
                        error!(
                            ?e,
                            chain = %chain,
                            start_block = start,
                            end_block = end,
                            "Error fetching logs at minimum chunk size"
                        );
                        return Err(ScanError::fetch(chain, start, end, e));
                    }
                },
            }
        }

        stats.chunks += 1;

        if end >= range.to_block() {
            break;
        }
        next_start = end + 1;

        if let Some(delay) = plan.rate_limit_delay {
            debug!(
                chain = %chain,
                delay_ms = delay.as_millis(),
                "Applying rate limit delay"
            );
            sleep(delay).await;
        }
    }

    stats.logs = all_logs.len();
    Ok((all_logs, stats))
}
