// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for walletscan operations.
//!
//! Telemetry is kept orthogonal to business logic: instrumented operations
//! attach a span built here instead of carrying `#[instrument]` attributes.

use alloy_chains::Chain;
use alloy_primitives::{Address, ChainId};
use tracing::Span;

/// Root span for a token balance aggregation request.
#[inline]
pub(crate) fn token_balances(owner: Address, token_count: usize) -> Span {
    tracing::debug_span!("walletscan.token_balances", owner = %owner, token_count)
}

/// Span for one chain's slice of a token balance aggregation.
///
/// Parent: token_balances span.
#[inline]
pub(crate) fn chain_token_balances(chain_id: ChainId, batched: bool, token_count: usize) -> Span {
    tracing::debug_span!(
        "walletscan.chain_token_balances",
        chain = %Chain::from_id(chain_id),
        batched,
        token_count,
    )
}

/// Root span for a native currency balance fan-out.
#[inline]
pub(crate) fn currency_balances(address: Address, chain_count: usize) -> Span {
    tracing::debug_span!("walletscan.currency_balances", address = %address, chain_count)
}

/// Root span for one fee estimation request.
#[inline]
pub(crate) fn fee_per_gas(chain_id: ChainId) -> Span {
    tracing::debug_span!("walletscan.fee_per_gas", chain = %Chain::from_id(chain_id))
}
