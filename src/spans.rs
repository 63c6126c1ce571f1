// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for bridgescan operations.
//!
//! Telemetry is kept apart from business logic: each instrumented operation has
//! a helper here, and the operation attaches it with
//! [`Instrument`](tracing::Instrument):
//!
//! ```rust,ignore
//! scan_range(&source, &query, range, &plan, None)
//!     .instrument(spans::scan(chain, from_block, to_block))
//!     .await
//! ```

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use tracing::Span;

use crate::Direction;

/// Create span for fetching records for one flow.
///
/// Parent: None (root span for this operation)
/// Children: scan, classify_logs
#[inline]
pub(crate) fn fetch_flow(
    chain: Chain,
    direction: Direction,
    from_block: BlockNumber,
    to_block: BlockNumber,
) -> Span {
    tracing::info_span!(
        "bridgescan.fetch_flow",
        chain_id = %chain,
        direction = direction.name(),
        from_block = from_block,
        to_block = to_block,
    )
}

/// Create span for a whole range scan.
///
/// Parent: fetch_flow span, if any
/// Children: fetch_chunk spans (one per attempt, shrinks included)
#[inline]
pub(crate) fn scan(chain: Chain, from_block: BlockNumber, to_block: BlockNumber) -> Span {
    tracing::info_span!(
        "bridgescan.scan",
        chain_id = %chain,
        from_block = from_block,
        to_block = to_block,
        block_count = to_block.saturating_sub(from_block).saturating_add(1),
    )
}

/// Create span for a single log-source request.
///
/// Parent: scan span
#[inline]
pub(crate) fn fetch_chunk(chain: Chain, from_block: BlockNumber, to_block: BlockNumber) -> Span {
    tracing::debug_span!(
        "bridgescan.fetch_chunk",
        chain_id = %chain,
        from_block = from_block,
        to_block = to_block,
    )
}

/// Create span for classifying the logs of a finished scan.
///
/// Parent: fetch_flow span
#[inline]
pub(crate) fn classify_logs(chain: Chain, direction: Direction, log_count: usize) -> Span {
    tracing::debug_span!(
        "bridgescan.classify_logs",
        chain_id = %chain,
        direction = direction.name(),
        log_count = log_count,
    )
}
