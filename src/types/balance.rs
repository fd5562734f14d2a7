// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Balance values: raw on-chain amounts paired with their decimal precision.
//!
//! A [`Balance`] stores the raw integer amount (wei for native currency,
//! smallest unit for tokens) together with the decimal precision needed to
//! derive a human-readable string. The raw value is authoritative; the
//! display string is always recomputed from it.

use alloy_primitives::{ChainId, U256};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::BalanceError;

/// A raw on-chain balance together with its decimal precision.
///
/// The display value is purely derived: `raw / 10^decimals`, rendered as a
/// plain decimal string with trailing zeros trimmed.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use walletscan::Balance;
///
/// let one_eth = Balance::new(U256::from(1_000_000_000_000_000_000u128), 18);
/// assert_eq!(one_eth.display(), "1");
/// assert_eq!(one_eth.raw_hex(), "0xde0b6b3a7640000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Raw integer balance in the smallest unit.
    raw: U256,
    /// Decimal precision used to derive the display value.
    decimals: u8,
}

impl Balance {
    /// Create a balance from a raw amount and decimal precision.
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Zero balance with the given decimal precision.
    pub const fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::ZERO,
            decimals,
        }
    }

    /// The raw integer balance.
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// The decimal precision.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The raw balance as a 0x-prefixed hex quantity (`"0x0"` for zero).
    pub fn raw_hex(&self) -> String {
        format!("{:#x}", self.raw)
    }

    /// Whether the raw balance is zero.
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Derive the human-readable decimal string: `raw / 10^decimals`.
    ///
    /// Always plain decimal notation, trailing zeros trimmed, never
    /// scientific notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use walletscan::Balance;
    ///
    /// let b = Balance::new(U256::from(1_500_000u64), 6);
    /// assert_eq!(b.display(), "1.5");
    /// ```
    pub fn display(&self) -> String {
        if self.decimals == 0 {
            return self.raw.to_string();
        }

        // Division in U256 space avoids overflow for large exponents
        let divisor = U256::from(10u64).pow(U256::from(self.decimals));
        let whole = self.raw / divisor;
        let fractional = self.raw % divisor;

        let fractional_str = format!("{:0width$}", fractional, width = self.decimals as usize);
        let trimmed = fractional_str.trim_end_matches('0');

        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{trimmed}")
        }
    }

    /// Convert to a [`BigDecimal`] for downstream arithmetic or storage.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::ConversionFailed`] if the raw value cannot be
    /// represented as a `BigDecimal`.
    pub fn to_bigdecimal(&self) -> Result<BigDecimal, BalanceError> {
        let divisor = U256::from(10u64).pow(U256::from(self.decimals));
        let whole = self.raw / divisor;
        let fractional = self.raw % divisor;

        let whole_decimal = BigDecimal::from_str(&whole.to_string())
            .map_err(|_| BalanceError::conversion_failed(whole))?;
        let fractional_decimal = BigDecimal::from_str(&fractional.to_string())
            .map_err(|_| BalanceError::conversion_failed(fractional))?;
        let divisor_decimal = BigDecimal::from_str(&divisor.to_string())
            .map_err(|_| BalanceError::conversion_failed(divisor))?;

        Ok(whole_decimal + (fractional_decimal / divisor_decimal))
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Native coin balance on one chain.
///
/// Pairs a [`Balance`] with the chain it was observed on. Native currencies
/// are assumed to carry 18 decimals unless overridden at the fetcher level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    /// Chain the balance was observed on.
    pub chain_id: ChainId,
    /// The observed native coin balance.
    pub balance: Balance,
}

impl CurrencyBalance {
    /// Create a currency balance for a chain.
    pub const fn new(chain_id: ChainId, balance: Balance) -> Self {
        Self { chain_id, balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_amount() {
        let b = Balance::new(U256::from(1_000_000_000_000_000_000u128), 18);
        assert_eq!(b.display(), "1");
    }

    #[test]
    fn display_fractional_amount() {
        let b = Balance::new(U256::from(1_500_000_000_000_000_000u128), 18);
        assert_eq!(b.display(), "1.5");
    }

    #[test]
    fn display_trims_trailing_zeros() {
        let b = Balance::new(U256::from(1_200_000u64), 6);
        assert_eq!(b.display(), "1.2");
    }

    #[test]
    fn display_small_fraction_keeps_all_digits() {
        let b = Balance::new(U256::from(123_456_789_012_345_678u128), 18);
        assert_eq!(b.display(), "0.123456789012345678");
    }

    #[test]
    fn display_zero_decimals() {
        let b = Balance::new(U256::from(42u64), 0);
        assert_eq!(b.display(), "42");
    }

    #[test]
    fn display_zero_balance() {
        assert_eq!(Balance::zero(18).display(), "0");
    }

    #[test]
    fn raw_hex_round_trip() {
        // 10^18 wei displays as exactly "1"
        let b = Balance::new(U256::from(1_000_000_000_000_000_000u128), 18);
        assert_eq!(b.raw_hex(), "0xde0b6b3a7640000");
        assert_eq!(b.display(), "1");
    }

    #[test]
    fn raw_hex_zero() {
        assert_eq!(Balance::zero(6).raw_hex(), "0x0");
    }

    #[test]
    fn to_bigdecimal_one_eth() {
        let b = Balance::new(U256::from(1_000_000_000_000_000_000u128), 18);
        let decimal = b.to_bigdecimal().unwrap();
        assert_eq!(decimal, BigDecimal::from(1u64));
    }

    #[test]
    fn to_bigdecimal_fractional() {
        let b = Balance::new(U256::from(2_500_000u64), 6);
        let decimal = b.to_bigdecimal().unwrap();
        assert_eq!(decimal, BigDecimal::from_str("2.5").unwrap());
    }

    #[test]
    fn currency_balance_keeps_chain_id() {
        let cb = CurrencyBalance::new(137, Balance::zero(18));
        assert_eq!(cb.chain_id, 137);
        assert!(cb.balance.is_zero());
    }

    #[test]
    fn serialization_uses_hex_quantity() {
        let b = Balance::new(U256::from(255u64), 18);
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["raw"], "0xff");

        let back: Balance = serde_json::from_value(json).unwrap();
        assert_eq!(back, b);
    }
}
