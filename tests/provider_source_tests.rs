// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the provider-backed log source using a mocked transport
//!
//! Responses are queued on an [`Asserter`] in the order the scanner will
//! request them.

mod helpers;

use std::sync::Arc;

use alloy_chains::Chain;
use alloy_provider::ProviderBuilder;
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use alloy_transport::mock::Asserter;
use bridgescan::{
    fetch_logs_adaptive, BlockRange, BridgeExecuted, BridgeScanConfig, ChunkPlan, Direction,
    FlowFetcher, LogQuery, LogSource, LogSourceError, MaxBlockRange, ProviderLogSource, ScanError,
};
use helpers::{bridge_log, CONTRACT};

fn query() -> LogQuery {
    LogQuery {
        chain: Chain::from_id(1),
        contract: CONTRACT,
        topic0: BridgeExecuted::SIGNATURE_HASH,
    }
}

#[tokio::test]
async fn test_get_logs_response_is_returned() {
    let asserter = Asserter::new();
    asserter.push_success(&vec![bridge_log(100, b"c=173"), bridge_log(101, b"c=1")]);
    let source = ProviderLogSource::new(ProviderBuilder::new().connect_mocked_client(asserter));

    let logs = source.fetch_logs(&query(), 100, 200).await.unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].block_number, Some(100));
    assert_eq!(logs[1].block_number, Some(101));
}

#[tokio::test]
async fn test_rpc_error_is_wrapped() {
    let asserter = Asserter::new();
    asserter.push_failure_msg("query exceeds max block range 500");
    let source = ProviderLogSource::new(ProviderBuilder::new().connect_mocked_client(asserter));

    let err = source.fetch_logs(&query(), 0, 9_999).await.unwrap_err();

    match err {
        LogSourceError::GetLogsFailed { operation, .. } => {
            assert!(operation.contains("0-9999"), "unexpected operation: {operation}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_adaptive_scan_over_provider() {
    let asserter = Asserter::new();
    // [0, 199] is rejected, [0, 100] and [101, 199] succeed
    asserter.push_failure_msg("query returned more than 10000 results");
    asserter.push_success(&vec![bridge_log(20, b"c=173")]);
    asserter.push_success(&vec![bridge_log(150, b"c=173")]);
    let source = ProviderLogSource::new(ProviderBuilder::new().connect_mocked_client(asserter));
    let plan = ChunkPlan::new(MaxBlockRange::new(200));

    let logs = fetch_logs_adaptive(&source, &query(), BlockRange::new(0, 199).unwrap(), &plan)
        .await
        .unwrap();

    let blocks: Vec<u64> = logs.iter().filter_map(|log| log.block_number).collect();
    assert_eq!(blocks, vec![20, 150]);
}

#[tokio::test]
async fn test_adaptive_scan_gives_up_at_floor() {
    let asserter = Asserter::new();
    // Widths 100, 51 and 26; the last is below the 50-block floor
    for _ in 0..3 {
        asserter.push_failure_msg("upstream unavailable");
    }
    let source = ProviderLogSource::new(ProviderBuilder::new().connect_mocked_client(asserter));
    let plan = ChunkPlan::new(MaxBlockRange::new(100));

    let err = fetch_logs_adaptive(&source, &query(), BlockRange::new(0, 999).unwrap(), &plan)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScanError::Fetch {
            from_block: 0,
            to_block: 25,
            ..
        }
    ));
}

#[tokio::test]
async fn test_flow_fetcher_over_provider() {
    let asserter = Asserter::new();
    let response: Vec<Log> = vec![
        bridge_log(1_000, b"c=173"),
        bridge_log(1_001, b"c=10"),
        bridge_log(1_002, b"garbage"),
    ];
    asserter.push_success(&response);
    let source = ProviderLogSource::new(ProviderBuilder::new().connect_mocked_client(asserter));
    let config = Arc::new(BridgeScanConfig::with_common_defaults(CONTRACT));
    let fetcher = FlowFetcher::new(Chain::from_id(1), Direction::Inflow, Arc::new(source), config);

    let records = fetcher.fetch(1_000, 1_500).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].block_number, 1_000);
    assert!(records[0].is_deposit);
}
