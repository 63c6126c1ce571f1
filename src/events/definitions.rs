// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge execution event definition
//!
//! # Event Signature
//!
//! `BridgeExecuted(address,address,address,address,uint256,bytes)`
//!
//! Only `sender` and `recipient` are indexed, so a matching log carries exactly
//! three topics: the signature hash, the sender and the recipient.
//!
//! # Example: Filtering and decoding
//!
//! ```rust,ignore
//! use bridgescan::BridgeExecuted;
//! use alloy_sol_types::SolEvent;
//!
//! let filter = Filter::new()
//!     .address(contract)
//!     .event_signature(BridgeExecuted::SIGNATURE_HASH);
//!
//! for log in provider.get_logs(&filter).await? {
//!     let event = BridgeExecuted::decode_log_data(&log.inner.data)?;
//!     println!("{} sent {} of {}", event.sender, event.inputAmount, event.inputToken);
//! }
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// Emitted by the bridge contract when a transfer is executed
    ///
    /// # Fields
    ///
    /// - `sender`: Address funds are taken from (indexed)
    /// - `recipient`: Address funds are delivered to (indexed)
    /// - `inputToken`: Token deposited on this chain
    /// - `outputToken`: Token paid out on the destination chain
    /// - `inputAmount`: Raw amount of `inputToken` (not adjusted for decimals)
    /// - `extData`: Routing payload, a query string such as `r=1&c=173`
    ///   where `c` is the destination chain id
    event BridgeExecuted(
        address indexed sender,
        address indexed recipient,
        address inputToken,
        address outputToken,
        uint256 inputAmount,
        bytes extData
    );
}

impl Debug for BridgeExecuted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BridgeExecuted(sender: {}, recipient: {}, input: {} of {}, output token: {}, ext data: {:?})",
            self.sender,
            self.recipient,
            self.inputAmount,
            self.inputToken,
            self.outputToken,
            self.extData
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, keccak256, Bytes, U256};
    use alloy_sol_types::SolEvent;

    #[test]
    fn test_signature_hash_matches_canonical_signature() {
        assert_eq!(
            BridgeExecuted::SIGNATURE,
            "BridgeExecuted(address,address,address,address,uint256,bytes)"
        );
        assert_eq!(
            BridgeExecuted::SIGNATURE_HASH,
            keccak256(BridgeExecuted::SIGNATURE.as_bytes())
        );
    }

    #[test]
    fn test_indexed_fields_become_topics() {
        let event = BridgeExecuted {
            sender: address!("1111111111111111111111111111111111111111"),
            recipient: address!("2222222222222222222222222222222222222222"),
            inputToken: address!("3333333333333333333333333333333333333333"),
            outputToken: address!("4444444444444444444444444444444444444444"),
            inputAmount: U256::from(1_000u64),
            extData: Bytes::from_static(b"c=173"),
        };

        let data = event.encode_log_data();
        assert_eq!(data.topics().len(), 3);
        assert_eq!(data.topics()[0], BridgeExecuted::SIGNATURE_HASH);

        let decoded = BridgeExecuted::decode_log_data(&data).unwrap();
        assert_eq!(decoded.inputAmount, U256::from(1_000u64));
        assert_eq!(decoded.extData.as_ref(), b"c=173");
    }
}
