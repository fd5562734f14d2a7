// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for fee estimation.
//!
//! These errors stay internal to the estimation pipeline: any of them causes
//! [`GasFeeEstimator::fee_per_gas`](crate::GasFeeEstimator::fee_per_gas) to
//! log a warning and return the configured fallback fee structure instead of
//! rejecting.

use super::RpcError;

/// Errors that can occur while estimating fees from block history.
#[derive(Debug, thiserror::Error)]
pub enum FeeEstimationError {
    /// Fee history was returned but could not be interpreted.
    #[error("Fee history response was malformed: {details}")]
    MalformedHistory {
        /// What was wrong with the history payload.
        details: String,
    },

    /// Fee history contained no blocks to estimate from.
    #[error("Fee history contained no blocks")]
    EmptyHistory,

    /// RPC error while fetching fee history.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

impl FeeEstimationError {
    /// Create a `MalformedHistory` error with details.
    pub fn malformed_history(details: impl std::fmt::Display) -> Self {
        FeeEstimationError::MalformedHistory {
            details: details.to_string(),
        }
    }
}
