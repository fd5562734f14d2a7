// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for balance value conversion.

use alloy_primitives::U256;

/// Errors from converting raw balances into decimal representations.
///
/// Balance aggregation itself is total and never returns errors; this type
/// only covers the optional bridge into `BigDecimal` for downstream
/// arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    /// A raw value could not be represented as a decimal.
    #[error("Failed to convert {value} into a decimal representation")]
    ConversionFailed {
        /// The value that failed to convert.
        value: String,
    },
}

impl BalanceError {
    /// Create a `ConversionFailed` error for a raw value.
    pub fn conversion_failed(value: U256) -> Self {
        BalanceError::ConversionFailed {
            value: value.to_string(),
        }
    }
}
