// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! This module centralizes magic constants used throughout the walletscan
//! crate, improving discoverability and maintainability.

use alloy_eips::eip1559::DEFAULT_BASE_FEE_MAX_CHANGE_DENOMINATOR as BASE_FEE_MAX_CHANGE_DENOMINATOR;
use alloy_primitives::{address, Address};

/// Wei per gwei (10^9).
pub const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Priority fee used when block history carries no usable reward signal:
/// 1 gwei.
pub const FALLBACK_PRIORITY_FEE_WEI: u128 = WEI_PER_GWEI;

/// Default max base fee used when fee history is entirely unavailable:
/// 10 gwei. Deployments targeting congested chains should override this
/// through [`WalletscanConfig`](crate::WalletscanConfig).
pub const DEFAULT_GAS_LEVEL_WEI: u128 = 10 * WEI_PER_GWEI;

/// Number of recent blocks sampled for fee estimation.
pub const DEFAULT_FEE_HISTORY_BLOCKS: u64 = 10;

/// Reward percentile sampled per block for the priority fee estimate.
pub const DEFAULT_REWARD_PERCENTILE: f64 = 10.0;

/// Lower bound (inclusive) on gas-used ratio for a block's priority fee
/// signal to count. Blocks below this are nearly empty.
pub const GAS_USED_RATIO_FLOOR: f64 = 0.1;

/// Upper bound (inclusive) on gas-used ratio for a block's priority fee
/// signal to count. Blocks above this are congestion outliers.
pub const GAS_USED_RATIO_CEILING: f64 = 0.9;

/// Decimal precision assumed for native currencies.
///
/// Every EVM chain in wide use carries an 18-decimal native coin, but the
/// protocol does not require it. Overridable through
/// [`WalletscanConfig`](crate::WalletscanConfig).
pub const DEFAULT_NATIVE_DECIMALS: u8 = 18;

/// Base-fee headroom numerator: `(1 + 1/8)^2` as a rational, covering two
/// consecutive blocks each raising the base fee by the protocol maximum.
pub const BASE_FEE_HEADROOM_NUMERATOR: u128 =
    ((BASE_FEE_MAX_CHANGE_DENOMINATOR + 1) * (BASE_FEE_MAX_CHANGE_DENOMINATOR + 1)) as u128;

/// Base-fee headroom denominator: `8^2`.
pub const BASE_FEE_HEADROOM_DENOMINATOR: u128 =
    (BASE_FEE_MAX_CHANGE_DENOMINATOR * BASE_FEE_MAX_CHANGE_DENOMINATOR) as u128;

/// Canonical Multicall3 deployment, shared across virtually all EVM chains.
///
/// Contract: 0xcA11bde05977b3631167028862bE2a173976CA11
pub const MULTICALL3_ADDRESS: Address = address!("ca11bde05977b3631167028862be2a173976ca11");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headroom_factors_cover_two_max_increase_blocks() {
        // 12.5% per block, twice: (9/8)^2 = 81/64
        assert_eq!(BASE_FEE_HEADROOM_NUMERATOR, 81);
        assert_eq!(BASE_FEE_HEADROOM_DENOMINATOR, 64);
    }

    #[test]
    fn multicall3_address_is_canonical() {
        assert_eq!(
            MULTICALL3_ADDRESS,
            address!("ca11bde05977b3631167028862be2a173976ca11")
        );
    }
}
