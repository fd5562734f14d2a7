// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Forward-looking EIP-1559 fee estimation from recent block history.
//!
//! The estimate reserves base-fee headroom for two consecutive blocks each
//! raising the base fee by the protocol maximum (12.5%), so a transaction
//! priced off it stays includable even if it misses the next two blocks. The
//! priority fee is the lower median of low-percentile rewards over blocks
//! whose gas usage makes their reward signal trustworthy.

use alloy_primitives::{ChainId, U256};
use alloy_rpc_types::{FeeHistory, TransactionRequest};
use serde_json::json;
use tracing::{debug, warn, Instrument};

use crate::config::constants::{
    BASE_FEE_HEADROOM_DENOMINATOR, BASE_FEE_HEADROOM_NUMERATOR, DEFAULT_FEE_HISTORY_BLOCKS,
    DEFAULT_GAS_LEVEL_WEI, DEFAULT_REWARD_PERCENTILE, FALLBACK_PRIORITY_FEE_WEI,
    GAS_USED_RATIO_CEILING, GAS_USED_RATIO_FLOOR,
};
use crate::config::WalletscanConfig;
use crate::errors::{FeeEstimationError, RpcError};
use crate::spans;
use crate::transport::{quantity_from_value, Transport};
use crate::types::{Eip1559GasFees, FeeHistoryBlock};

use super::shape_fee_history;

/// Estimates gas fees for one chain.
///
/// [`fee_per_gas`](Self::fee_per_gas) never rejects: when history cannot be
/// fetched or interpreted, it logs a warning and returns a fee structure
/// built from the configured defaults. Gas-limit estimation
/// ([`gas_estimate`](Self::gas_estimate)) is the one operation that
/// propagates transport errors, because no safe synthetic gas limit exists.
#[derive(Debug, Clone)]
pub struct GasFeeEstimator<T> {
    transport: T,
    chain_id: ChainId,
    default_gas_level: U256,
    fallback_priority_fee: U256,
    fee_history_blocks: u64,
    reward_percentile: f64,
    ratio_floor: f64,
    ratio_ceiling: f64,
}

impl<T> GasFeeEstimator<T>
where
    T: Transport,
{
    /// Create an estimator for `chain_id` with default parameters.
    pub fn new(transport: T, chain_id: ChainId) -> Self {
        Self {
            transport,
            chain_id,
            default_gas_level: U256::from(DEFAULT_GAS_LEVEL_WEI),
            fallback_priority_fee: U256::from(FALLBACK_PRIORITY_FEE_WEI),
            fee_history_blocks: DEFAULT_FEE_HISTORY_BLOCKS,
            reward_percentile: DEFAULT_REWARD_PERCENTILE,
            ratio_floor: GAS_USED_RATIO_FLOOR,
            ratio_ceiling: GAS_USED_RATIO_CEILING,
        }
    }

    /// Create an estimator taking its parameters from a
    /// [`WalletscanConfig`].
    pub fn from_config(transport: T, chain_id: ChainId, config: &WalletscanConfig) -> Self {
        Self {
            transport,
            chain_id,
            default_gas_level: config.default_gas_level,
            fallback_priority_fee: config.fallback_priority_fee,
            fee_history_blocks: config.fee_history_blocks,
            reward_percentile: config.reward_percentile,
            ratio_floor: config.gas_used_ratio_bounds.0,
            ratio_ceiling: config.gas_used_ratio_bounds.1,
        }
    }

    /// Override the fallback max base fee, in wei.
    pub fn with_default_gas_level(mut self, wei: U256) -> Self {
        self.default_gas_level = wei;
        self
    }

    /// Estimate the EIP-1559 fee structure for the next transaction.
    ///
    /// Always resolves to a usable structure: on any failure the configured
    /// fallback is returned and the failure is logged as a warning.
    pub async fn fee_per_gas(&self) -> Eip1559GasFees {
        let span = spans::fee_per_gas(self.chain_id);
        self.fee_per_gas_inner().instrument(span).await
    }

    async fn fee_per_gas_inner(&self) -> Eip1559GasFees {
        match self.estimate_from_history().await {
            Ok(fees) => {
                debug!(
                    chain_id = self.chain_id,
                    max_base_fee = %fees.max_base_fee_per_gas,
                    max_priority_fee = %fees.max_priority_fee_per_gas,
                    "Estimated fees from block history"
                );
                fees
            }
            Err(e) => {
                warn!(
                    chain_id = self.chain_id,
                    error = %e,
                    "Fee history unavailable, falling back to configured defaults"
                );
                Eip1559GasFees::from_components(self.default_gas_level, self.fallback_priority_fee)
            }
        }
    }

    async fn estimate_from_history(&self) -> Result<Eip1559GasFees, FeeEstimationError> {
        let history = self.sample_history().await?;

        let next_block_fee = history
            .next_block_base_fee()
            .ok_or(FeeEstimationError::EmptyHistory)?;
        let max_base_fee = base_fee_with_headroom(next_block_fee);

        let blocks = shape_fee_history(&history)?;
        let priority_fee = self.median_priority_fee(&blocks);

        Ok(Eip1559GasFees::from_components(
            U256::from(max_base_fee),
            priority_fee,
        ))
    }

    async fn sample_history(&self) -> Result<FeeHistory, FeeEstimationError> {
        let params = json!([
            format!("{:#x}", self.fee_history_blocks),
            "latest",
            [self.reward_percentile],
        ]);

        let response = self
            .transport
            .request(self.chain_id, "eth_feeHistory", params)
            .await?;
        serde_json::from_value(response).map_err(FeeEstimationError::malformed_history)
    }

    /// Lower median of eligible blocks' reward samples; the configured
    /// fallback when no usable signal exists.
    fn median_priority_fee(&self, blocks: &[FeeHistoryBlock]) -> U256 {
        let mut rewards: Vec<u128> = blocks
            .iter()
            .filter(|block| block.is_eligible(self.ratio_floor, self.ratio_ceiling))
            .filter_map(|block| block.priority_fee)
            .collect();

        if rewards.is_empty() {
            return self.fallback_priority_fee;
        }

        rewards.sort_unstable();
        U256::from(rewards[rewards.len() / 2])
    }

    /// Estimate the gas limit for a transaction by simulating it.
    ///
    /// # Errors
    ///
    /// Propagates the transport's reported error unchanged; there is no
    /// safe default gas limit to substitute.
    pub async fn gas_estimate(&self, transaction: &TransactionRequest) -> Result<U256, RpcError> {
        let response = self
            .transport
            .request(self.chain_id, "eth_estimateGas", json!([transaction]))
            .await?;
        quantity_from_value("eth_estimateGas", response)
    }

    /// The configured default gas price, returned directly without
    /// computation.
    pub fn gas_price(&self) -> U256 {
        self.default_gas_level
    }
}

/// Headroom for two consecutive maximum base-fee increases:
/// `ceil(next_block_fee * (9/8)^2)`.
fn base_fee_with_headroom(next_block_fee: u128) -> u128 {
    next_block_fee
        .saturating_mul(BASE_FEE_HEADROOM_NUMERATOR)
        .saturating_add(BASE_FEE_HEADROOM_DENOMINATOR - 1)
        / BASE_FEE_HEADROOM_DENOMINATOR
}
