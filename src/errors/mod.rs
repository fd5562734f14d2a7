// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the walletscan library.
//!
//! Balance operations recover from failures as close to their source as
//! possible, so most of the error surface never reaches callers: a failed
//! balance call degrades to a zero entry and is recorded through tracing
//! only. The types here cover the paths that do escalate:
//!
//! - [`RpcError`] - transport and response-shape failures, surfaced by the
//!   transport implementations and by gas-limit estimation (the one
//!   operation with no safe synthetic default)
//! - [`FeeEstimationError`] - internal failures of the fee estimation
//!   pipeline; converted to a fallback fee structure before reaching callers
//! - [`BalanceError`] - conversion failures when bridging raw balances into
//!   decimal types
//!
//! [`WalletscanError`] wraps all of them for callers that don't need to
//! distinguish error sources.

mod balance;
mod fees;
mod rpc;

pub use balance::BalanceError;
pub use fees::FeeEstimationError;
pub use rpc::RpcError;

/// Unified error type for all walletscan operations.
///
/// All module-specific error types convert into `WalletscanError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum WalletscanError {
    /// Error from an RPC transport or response decode.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from the fee estimation pipeline.
    #[error("Fee estimation error: {0}")]
    FeeEstimation(#[from] FeeEstimationError),

    /// Error from balance value conversion.
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),
}
