// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Multicall3-backed batch execution.
//!
//! Implements the batched read primitive as a single `eth_call` to the
//! canonical Multicall3 aggregator with `aggregate3`, `allowFailure: true`.
//! Inner call failures come back as per-item `success: false` and never fail
//! the batch.

use alloy_primitives::{Address, ChainId};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::constants::MULTICALL3_ADDRESS;
use crate::errors::RpcError;
use crate::transport::{bytes_from_value, Transport};

use super::{BatchCall, BatchCallOutcome, CallBatcher};

sol! {
    struct Call3 {
        address target;
        bool allowFailure;
        bytes callData;
    }

    struct CallOutcome {
        bool success;
        bytes returnData;
    }

    function aggregate3(Call3[] calldata calls) external payable returns (CallOutcome[] memory returnData);
}

/// A [`CallBatcher`] executing batches through the Multicall3 aggregator
/// contract.
#[derive(Debug, Clone)]
pub struct Multicall3Batcher<T> {
    transport: T,
    address: Address,
}

impl<T> Multicall3Batcher<T> {
    /// Create a batcher using the canonical Multicall3 deployment.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            address: MULTICALL3_ADDRESS,
        }
    }

    /// Override the aggregator address, for chains with a non-canonical
    /// deployment.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }
}

#[async_trait]
impl<T> CallBatcher for Multicall3Batcher<T>
where
    T: Transport,
{
    async fn call_batch(
        &self,
        chain_id: ChainId,
        calls: &[BatchCall],
    ) -> Result<Vec<BatchCallOutcome>, RpcError> {
        if calls.is_empty() {
            return Ok(vec![]);
        }

        debug!(chain_id, count = calls.len(), "Submitting multicall batch");

        let aggregate = aggregate3Call {
            calls: calls
                .iter()
                .map(|call| Call3 {
                    target: call.target,
                    allowFailure: true,
                    callData: call.calldata.clone(),
                })
                .collect(),
        };

        let params = json!([
            {
                "to": self.address,
                "data": format!("0x{}", alloy_primitives::hex::encode(aggregate.abi_encode())),
            },
            "latest",
        ]);

        let response = self.transport.request(chain_id, "eth_call", params).await?;
        let raw = bytes_from_value("eth_call", response)?;

        let outcomes = aggregate3Call::abi_decode_returns(&raw)
            .map_err(|e| RpcError::invalid_response("eth_call", format!("aggregate3: {e}")))?;

        if outcomes.len() != calls.len() {
            return Err(RpcError::invalid_response(
                "eth_call",
                format!(
                    "aggregate3 returned {} results for {} calls",
                    outcomes.len(),
                    calls.len()
                ),
            ));
        }

        Ok(outcomes
            .into_iter()
            .map(|outcome| BatchCallOutcome {
                success: outcome.success,
                return_data: outcome.returnData,
            })
            .collect())
    }
}
