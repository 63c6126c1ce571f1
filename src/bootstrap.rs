// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry point: scan one chain and print its records as JSON lines.
//!
//! Settings come from the environment (a `.env` file is honored):
//!
//! | Variable                      | Meaning                               |
//! |-------------------------------|---------------------------------------|
//! | `BRIDGESCAN_RPC_URL`          | HTTP RPC endpoint of the scanned chain |
//! | `BRIDGESCAN_CHAIN_ID`         | Id of the scanned chain               |
//! | `BRIDGESCAN_CONTRACT`         | Bridge contract address               |
//! | `BRIDGESCAN_TARGET_CHAIN_ID`  | Target network id (default 173)       |
//! | `BRIDGESCAN_FROM_BLOCK`       | First block (inclusive)               |
//! | `BRIDGESCAN_TO_BLOCK`         | Last block (inclusive)                |
//!
//! Scanning the target chain itself reports outflows; any other chain reports
//! inflows.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::{Address, BlockNumber};
use alloy_provider::ProviderBuilder;
use dotenvy::dotenv;
use tracing::info;

use crate::config::constants::REFERENCE_TARGET_CHAIN_ID;
use crate::errors::ConfigError;
use crate::{BridgeScanConfigBuilder, Direction, FlowFetcher, ProviderLogSource};

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub rpc_url: String,
    pub chain_id: u64,
    pub contract: Address,
    pub target_chain_id: u64,
    pub from_block: BlockNumber,
    pub to_block: BlockNumber,
}

impl ScanSettings {
    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_chain_id = match lookup("BRIDGESCAN_TARGET_CHAIN_ID") {
            Some(raw) => parse("BRIDGESCAN_TARGET_CHAIN_ID", &raw)?,
            None => REFERENCE_TARGET_CHAIN_ID,
        };

        Ok(Self {
            rpc_url: required(&lookup, "BRIDGESCAN_RPC_URL")?,
            chain_id: required(&lookup, "BRIDGESCAN_CHAIN_ID")?,
            contract: required(&lookup, "BRIDGESCAN_CONTRACT")?,
            target_chain_id,
            from_block: required(&lookup, "BRIDGESCAN_FROM_BLOCK")?,
            to_block: required(&lookup, "BRIDGESCAN_TO_BLOCK")?,
        })
    }

    /// Read settings from the process environment
    ///
    /// Does not load `.env`; [`run`] does that once before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Outflow when scanning the target chain, inflow otherwise
    pub fn direction(&self) -> Direction {
        if self.chain_id == self.target_chain_id {
            Direction::Outflow
        } else {
            Direction::Inflow
        }
    }
}

fn required<F, T>(lookup: &F, key: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).ok_or_else(|| ConfigError::missing(key))?;
    parse(key, &raw)
}

fn parse<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string()))
}

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let settings = ScanSettings::from_env()?;
    let chain = Chain::from_id(settings.chain_id);
    let direction = settings.direction();

    let config = BridgeScanConfigBuilder::with_defaults(settings.contract)
        .target_chain_id(settings.target_chain_id)
        .build();

    let provider = ProviderBuilder::new().connect_http(settings.rpc_url.parse()?);
    let fetcher = FlowFetcher::new(
        chain,
        direction,
        Arc::new(ProviderLogSource::new(provider)),
        Arc::new(config),
    );

    info!(
        chain = %chain,
        direction = %direction,
        from_block = settings.from_block,
        to_block = settings.to_block,
        "Scanning bridge flow"
    );

    let records = fetcher
        .fetch(settings.from_block, settings.to_block)
        .await?;

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    info!(records_count = records.len(), "Bridge flow scan complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const BASE_VARS: &[(&str, &str)] = &[
        ("BRIDGESCAN_RPC_URL", "http://localhost:8545"),
        ("BRIDGESCAN_CHAIN_ID", "1"),
        (
            "BRIDGESCAN_CONTRACT",
            "0x00000000000000000000000000000000000000aa",
        ),
        ("BRIDGESCAN_FROM_BLOCK", "100"),
        ("BRIDGESCAN_TO_BLOCK", " 200 "),
    ];

    #[test]
    fn test_settings_default_target_and_inflow() {
        let settings = ScanSettings::from_lookup(lookup_from(BASE_VARS)).unwrap();

        assert_eq!(settings.target_chain_id, 173);
        assert_eq!(settings.to_block, 200);
        assert_eq!(settings.direction(), Direction::Inflow);
    }

    #[test]
    fn test_scanning_target_chain_is_outflow() {
        let mut vars = BASE_VARS.to_vec();
        vars.push(("BRIDGESCAN_TARGET_CHAIN_ID", "1"));

        let settings = ScanSettings::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(settings.direction(), Direction::Outflow);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Only test in this binary that touches the process environment
        for (key, value) in BASE_VARS {
            std::env::set_var(key, value);
        }
        std::env::set_var("BRIDGESCAN_TARGET_CHAIN_ID", "1");

        let settings = ScanSettings::from_env().unwrap();

        assert_eq!(settings.chain_id, 1);
        assert_eq!(settings.from_block, 100);
        assert_eq!(settings.direction(), Direction::Outflow);
    }

    #[test]
    fn test_missing_and_invalid_settings() {
        let vars: Vec<_> = BASE_VARS
            .iter()
            .copied()
            .filter(|(k, _)| *k != "BRIDGESCAN_CONTRACT")
            .collect();
        let err = ScanSettings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { field } if field == "BRIDGESCAN_CONTRACT"));

        let mut vars = BASE_VARS.to_vec();
        vars.retain(|(k, _)| *k != "BRIDGESCAN_FROM_BLOCK");
        vars.push(("BRIDGESCAN_FROM_BLOCK", "latest"));
        let err = ScanSettings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { field, .. } if field == "BRIDGESCAN_FROM_BLOCK")
        );
    }
}
