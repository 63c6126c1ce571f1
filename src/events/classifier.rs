// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Inflow/outflow classification of bridge execution logs
//!
//! A log becomes a [`TransferRecord`] when it decodes as [`BridgeExecuted`], its
//! routing payload names a destination chain, and that destination fits the
//! requested [`Direction`]:
//!
//! | Direction | Destination is target | Destination elsewhere | Destination unknown |
//! |-----------|-----------------------|-----------------------|---------------------|
//! | Inflow    | record, deposit       | skip                  | skip                |
//! | Outflow   | skip                  | record, withdrawal    | skip                |
//!
//! Everything that prevents classification is logged at debug level and the
//! log is skipped; nothing here fails a scan.

use alloy_chains::Chain;
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use tracing::debug;

use crate::errors::ClassifyError;
use crate::events::definitions::BridgeExecuted;
use crate::events::routing::{
    decode_payload_text, parse_destination_chain_id, TextDecoding, PAYLOAD_DECODINGS,
};
use crate::spans;
use crate::types::transfer::{Direction, TransferRecord};

/// Turns raw logs into transfer records relative to a fixed target chain
#[derive(Debug, Clone)]
pub struct EventClassifier {
    target_chain_id: u64,
    decodings: &'static [TextDecoding],
}

impl EventClassifier {
    pub fn new(target_chain_id: u64) -> Self {
        Self {
            target_chain_id,
            decodings: PAYLOAD_DECODINGS,
        }
    }

    /// Replace the ordered list of payload text decodings
    pub fn with_decodings(mut self, decodings: &'static [TextDecoding]) -> Self {
        self.decodings = decodings;
        self
    }

    pub fn target_chain_id(&self) -> u64 {
        self.target_chain_id
    }

    /// Decode a log as a bridge execution
    pub fn decode(&self, log: &Log) -> Result<BridgeExecuted, ClassifyError> {
        BridgeExecuted::decode_log_data(&log.inner.data)
            .map_err(|e| ClassifyError::event_decode(e.to_string()))
    }

    /// Destination chain id named by the event's routing payload
    pub fn destination_chain_id(&self, event: &BridgeExecuted) -> Result<u64, ClassifyError> {
        let text = decode_payload_text(&event.extData, self.decodings)
            .ok_or(ClassifyError::PayloadText)?;

        parse_destination_chain_id(&text).ok_or_else(|| ClassifyError::UnknownDestination {
            payload: text.into_owned(),
        })
    }

    /// Whether the event is headed to the target chain
    ///
    /// `None` when the destination cannot be determined.
    pub fn is_target_destination(&self, event: &BridgeExecuted) -> Option<bool> {
        match self.destination_chain_id(event) {
            Ok(destination) => Some(destination == self.target_chain_id),
            Err(e) => {
                debug!(error = %e, "Routing payload has no destination");
                None
            }
        }
    }

    /// Classify one log, returning `None` when it does not belong to `direction`
    pub fn classify(&self, log: &Log, direction: Direction) -> Option<TransferRecord> {
        let event = match self.decode(log) {
            Ok(event) => event,
            Err(e) => {
                debug!(error = %e, tx_hash = ?log.transaction_hash, "Skipping log");
                return None;
            }
        };

        if !direction.accepts(self.is_target_destination(&event)) {
            return None;
        }

        match record_from(log, event, direction) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Skipping log");
                None
            }
        }
    }

    /// Classify a batch of logs found on `chain`, preserving their order
    pub fn classify_all(
        &self,
        chain: Chain,
        logs: &[Log],
        direction: Direction,
    ) -> Vec<TransferRecord> {
        let _guard = spans::classify_logs(chain, direction, logs.len()).entered();

        let records: Vec<TransferRecord> = logs
            .iter()
            .filter_map(|log| self.classify(log, direction))
            .collect();

        debug!(
            chain = %chain,
            direction = %direction,
            logs_count = logs.len(),
            records_count = records.len(),
            "Classified bridge logs"
        );

        records
    }
}

fn record_from(
    log: &Log,
    event: BridgeExecuted,
    direction: Direction,
) -> Result<TransferRecord, ClassifyError> {
    let tx_hash = log
        .transaction_hash
        .ok_or(ClassifyError::MissingEnvelope {
            field: "transaction hash",
        })?;
    let block_number = log.block_number.ok_or(ClassifyError::MissingEnvelope {
        field: "block number",
    })?;

    Ok(TransferRecord {
        tx_hash,
        block_number,
        from: event.sender,
        to: event.recipient,
        token: event.inputToken,
        amount: event.inputAmount,
        is_deposit: direction.is_deposit(),
    })
}
