// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for walletscan operations
//!
//! This module provides a flexible configuration system for RPC endpoints,
//! fee estimation parameters, and the native-currency decimal assumption.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use walletscan::WalletscanConfig;
//!
//! let config = WalletscanConfig::default();
//! assert_eq!(config.fee_history_blocks, 10);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use alloy_primitives::U256;
//! use walletscan::WalletscanConfigBuilder;
//! use url::Url;
//!
//! let config = WalletscanConfigBuilder::with_defaults()
//!     .endpoint(1, Url::parse("https://eth.llamarpc.com").unwrap())
//!     .endpoint(10, Url::parse("https://mainnet.optimism.io").unwrap())
//!     .default_gas_level(U256::from(30_000_000_000u64)) // 30 gwei
//!     .build();
//!
//! assert_eq!(config.endpoints.len(), 2);
//! ```

use std::collections::HashMap;

use alloy_primitives::{ChainId, U256};
use url::Url;

pub mod constants;

use constants::{
    DEFAULT_FEE_HISTORY_BLOCKS, DEFAULT_GAS_LEVEL_WEI, DEFAULT_NATIVE_DECIMALS,
    DEFAULT_REWARD_PERCENTILE, FALLBACK_PRIORITY_FEE_WEI, GAS_USED_RATIO_CEILING,
    GAS_USED_RATIO_FLOOR,
};

/// Configuration for walletscan operations.
///
/// Use [`WalletscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct WalletscanConfig {
    /// RPC endpoint per chain, consumed by
    /// [`HttpTransport`](crate::HttpTransport).
    pub endpoints: HashMap<ChainId, Url>,

    /// Max base fee (in wei) reported when fee history is unavailable.
    pub default_gas_level: U256,

    /// Priority fee (in wei) used when no usable reward signal exists.
    pub fallback_priority_fee: U256,

    /// Decimal precision assumed for native currencies.
    ///
    /// Default: 18. Not every conceivable chain honors this; override it for
    /// deployments where the assumption does not hold.
    pub native_decimals: u8,

    /// Number of recent blocks sampled by `eth_feeHistory`.
    pub fee_history_blocks: u64,

    /// Reward percentile sampled per block.
    pub reward_percentile: f64,

    /// Closed gas-used-ratio interval a block must fall in for its reward
    /// sample to count.
    pub gas_used_ratio_bounds: (f64, f64),
}

impl Default for WalletscanConfig {
    fn default() -> Self {
        Self {
            endpoints: HashMap::new(),
            default_gas_level: U256::from(DEFAULT_GAS_LEVEL_WEI),
            fallback_priority_fee: U256::from(FALLBACK_PRIORITY_FEE_WEI),
            native_decimals: DEFAULT_NATIVE_DECIMALS,
            fee_history_blocks: DEFAULT_FEE_HISTORY_BLOCKS,
            reward_percentile: DEFAULT_REWARD_PERCENTILE,
            gas_used_ratio_bounds: (GAS_USED_RATIO_FLOOR, GAS_USED_RATIO_CEILING),
        }
    }
}

impl WalletscanConfig {
    /// Create a builder pre-populated with defaults.
    pub fn builder() -> WalletscanConfigBuilder {
        WalletscanConfigBuilder::with_defaults()
    }
}

/// Builder for [`WalletscanConfig`].
#[derive(Debug, Clone, Default)]
pub struct WalletscanConfigBuilder {
    config: WalletscanConfig,
}

impl WalletscanConfigBuilder {
    /// Create a builder starting from the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: WalletscanConfig::default(),
        }
    }

    /// Register the RPC endpoint for a chain.
    pub fn endpoint(mut self, chain_id: ChainId, url: Url) -> Self {
        self.config.endpoints.insert(chain_id, url);
        self
    }

    /// Set the fallback max base fee, in wei.
    pub fn default_gas_level(mut self, wei: U256) -> Self {
        self.config.default_gas_level = wei;
        self
    }

    /// Set the fallback priority fee, in wei.
    pub fn fallback_priority_fee(mut self, wei: U256) -> Self {
        self.config.fallback_priority_fee = wei;
        self
    }

    /// Override the native-currency decimal assumption.
    pub fn native_decimals(mut self, decimals: u8) -> Self {
        self.config.native_decimals = decimals;
        self
    }

    /// Set the fee-history window size, in blocks.
    pub fn fee_history_blocks(mut self, blocks: u64) -> Self {
        self.config.fee_history_blocks = blocks;
        self
    }

    /// Set the reward percentile sampled per block.
    pub fn reward_percentile(mut self, percentile: f64) -> Self {
        self.config.reward_percentile = percentile;
        self
    }

    /// Set the closed gas-used-ratio eligibility interval.
    pub fn gas_used_ratio_bounds(mut self, floor: f64, ceiling: f64) -> Self {
        self.config.gas_used_ratio_bounds = (floor, ceiling);
        self
    }

    /// Build the configured [`WalletscanConfig`].
    pub fn build(self) -> WalletscanConfig {
        self.config
    }
}
