// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Batched read-call execution.
//!
//! The aggregation layer decides *per chain* whether to batch, through a
//! [`BatchCapabilityOracle`], and hands batched work to a [`CallBatcher`].
//! The choice is resolved once per chain before any fan-out, as an explicit
//! two-way dispatch.
//!
//! Both traits are seams: [`Multicall3Batcher`] and
//! [`StaticCapabilityOracle`] are the shipped implementations, and tests
//! substitute their own.

mod multicall;

pub use multicall::Multicall3Batcher;

use std::collections::HashSet;
use std::sync::Arc;

use alloy_primitives::{Address, Bytes, ChainId};
use async_trait::async_trait;

use crate::errors::RpcError;

/// One read call in a batch: target contract and ABI-encoded calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCall {
    /// Contract to call.
    pub target: Address,
    /// ABI-encoded calldata.
    pub calldata: Bytes,
}

/// Per-call outcome of a batch execution.
///
/// `return_data` is only meaningful when `success` is true; decoding it is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCallOutcome {
    /// Whether the inner call succeeded.
    pub success: bool,
    /// Raw ABI-encoded return data.
    pub return_data: Bytes,
}

impl BatchCallOutcome {
    /// A successful outcome carrying return data.
    pub fn success(return_data: Bytes) -> Self {
        Self {
            success: true,
            return_data,
        }
    }

    /// A failed outcome with no usable return data.
    pub fn failure() -> Self {
        Self {
            success: false,
            return_data: Bytes::new(),
        }
    }
}

/// Executes an ordered list of read calls against one chain in a single
/// round trip.
///
/// Implementations must return exactly one outcome per input call, in input
/// order. An `Err` means the batch as a whole could not be executed; callers
/// degrade every affected item rather than propagating.
#[async_trait]
pub trait CallBatcher: Send + Sync {
    /// Execute `calls` against `chain_id` in one round trip.
    async fn call_batch(
        &self,
        chain_id: ChainId,
        calls: &[BatchCall],
    ) -> Result<Vec<BatchCallOutcome>, RpcError>;
}

#[async_trait]
impl<B> CallBatcher for Arc<B>
where
    B: CallBatcher + ?Sized,
{
    async fn call_batch(
        &self,
        chain_id: ChainId,
        calls: &[BatchCall],
    ) -> Result<Vec<BatchCallOutcome>, RpcError> {
        (**self).call_batch(chain_id, calls).await
    }
}

/// Answers whether the batched-call primitive is available on a chain.
pub trait BatchCapabilityOracle: Send + Sync {
    /// Whether batched calls are supported on `chain_id`.
    fn supports_batching(&self, chain_id: ChainId) -> bool;
}

impl<O> BatchCapabilityOracle for Arc<O>
where
    O: BatchCapabilityOracle + ?Sized,
{
    fn supports_batching(&self, chain_id: ChainId) -> bool {
        (**self).supports_batching(chain_id)
    }
}

/// A capability oracle backed by a fixed set of chain ids.
///
/// # Examples
///
/// ```
/// use walletscan::{BatchCapabilityOracle, StaticCapabilityOracle};
///
/// let oracle = StaticCapabilityOracle::new([1, 10, 137]);
/// assert!(oracle.supports_batching(137));
/// assert!(!oracle.supports_batching(59144));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilityOracle {
    chains: HashSet<ChainId>,
}

impl StaticCapabilityOracle {
    /// Create an oracle reporting support for exactly the given chains.
    pub fn new(chains: impl IntoIterator<Item = ChainId>) -> Self {
        Self {
            chains: chains.into_iter().collect(),
        }
    }

    /// An oracle that reports no chain as batch-capable, forcing the
    /// per-call fallback path everywhere.
    pub fn none() -> Self {
        Self::default()
    }
}

impl BatchCapabilityOracle for StaticCapabilityOracle {
    fn supports_batching(&self, chain_id: ChainId) -> bool {
        self.chains.contains(&chain_id)
    }
}
