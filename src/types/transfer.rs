// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer records handed to the accounting pipeline.

use alloy_primitives::{Address, BlockNumber, TxHash, U256};
use serde::{Deserialize, Serialize};

/// Which side of the target network a scan classifies
///
/// - `Inflow`: scanning a source chain, keep transfers headed to the target
/// - `Outflow`: scanning the target chain itself, keep transfers headed elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inflow,
    Outflow,
}

impl Direction {
    /// Value of [`TransferRecord::is_deposit`] for records of this direction
    pub const fn is_deposit(self) -> bool {
        matches!(self, Direction::Inflow)
    }

    /// Whether a transfer with the given destination belongs to this direction
    ///
    /// An unknown destination never matches.
    pub fn accepts(self, is_target_destination: Option<bool>) -> bool {
        match (self, is_target_destination) {
            (Direction::Inflow, Some(true)) => true,
            (Direction::Outflow, Some(false)) => true,
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Inflow => "inflow",
            Direction::Outflow => "outflow",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single bridge transfer, classified as a deposit into or a withdrawal out of
/// the target network
///
/// Field names serialize in camelCase (`txHash`, `blockNumber`, `isDeposit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub tx_hash: TxHash,
    pub block_number: BlockNumber,
    /// Event `sender`
    pub from: Address,
    /// Event `recipient`
    pub to: Address,
    /// Event `inputToken`
    pub token: Address,
    /// Event `inputAmount`, raw (not adjusted for decimals)
    pub amount: U256,
    /// `true` for inflows, `false` for outflows
    pub is_deposit: bool,
}
