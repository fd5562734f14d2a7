// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fee estimation value types.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// One historical block's fee signals, shaped from an `eth_feeHistory`
/// response.
///
/// The reward sample is the priority fee paid at the requested percentile of
/// the block's transactions. Nodes may omit reward data entirely, in which
/// case the sample is absent and the block contributes nothing to the
/// priority fee estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeHistoryBlock {
    /// Base fee of the block, in wei.
    pub base_fee_per_gas: u128,
    /// Fraction of the block's gas capacity consumed, in `[0, 1]`.
    pub gas_used_ratio: f64,
    /// Reward sample at the requested percentile, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_fee: Option<u128>,
}

impl FeeHistoryBlock {
    /// Whether this block's priority fee signal is usable.
    ///
    /// Nearly-empty blocks carry unreliable priority fees and nearly-full
    /// blocks are congestion outliers; both ends are excluded. The interval
    /// is closed on both sides.
    pub fn is_eligible(&self, floor: f64, ceiling: f64) -> bool {
        self.gas_used_ratio >= floor && self.gas_used_ratio <= ceiling
    }
}

/// EIP-1559 fee structure for an upcoming transaction.
///
/// All three fields are always present, including on the fallback path, and
/// `max_fee_per_gas` always equals `max_base_fee_per_gas +
/// max_priority_fee_per_gas`. Construct via [`from_components`] to keep that
/// invariant.
///
/// [`from_components`]: Self::from_components
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use walletscan::Eip1559GasFees;
///
/// let fees = Eip1559GasFees::from_components(U256::from(140u64), U256::from(3u64));
/// assert_eq!(fees.max_fee_per_gas, U256::from(143u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip1559GasFees {
    /// Base fee ceiling the estimate covers, in wei.
    pub max_base_fee_per_gas: U256,
    /// Priority fee (tip) per gas, in wei.
    pub max_priority_fee_per_gas: U256,
    /// Total fee cap per gas: base + priority, in wei.
    pub max_fee_per_gas: U256,
}

impl Eip1559GasFees {
    /// Build a fee structure from its base and priority components.
    ///
    /// The fee cap is derived, never supplied.
    pub fn from_components(max_base_fee_per_gas: U256, max_priority_fee_per_gas: U256) -> Self {
        Self {
            max_base_fee_per_gas,
            max_priority_fee_per_gas,
            max_fee_per_gas: max_base_fee_per_gas.saturating_add(max_priority_fee_per_gas),
        }
    }
}
