// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token balance aggregation with capability-based dispatch.
//!
//! For each chain group the aggregator resolves, once, whether the chain
//! supports batched calls. Capable chains get one batched `balanceOf`
//! submission; the rest get independent per-token calls. Either way, any
//! per-item failure is replaced by a zero balance for that token alone, so
//! the aggregate result is always complete.

use alloy_primitives::{Address, Bytes, ChainId, U256};
use alloy_sol_types::{sol, SolCall};
use futures::future::join_all;
use serde_json::json;
use tracing::{warn, Instrument};

use crate::batch::{BatchCall, BatchCallOutcome, BatchCapabilityOracle, CallBatcher};
use crate::errors::RpcError;
use crate::spans;
use crate::transport::{bytes_from_value, Transport};
use crate::types::{TokenBalance, TokenDefinition};

use super::group_by_chain;

sol! {
    function balanceOf(address owner) external view returns (uint256);
}

/// ABI-encoded `balanceOf(owner)` calldata.
pub(crate) fn balance_of_calldata(owner: Address) -> Bytes {
    balanceOfCall { owner }.abi_encode().into()
}

fn decode_balance_return(data: &[u8]) -> Result<U256, alloy_sol_types::Error> {
    balanceOfCall::abi_decode_returns(data)
}

/// Aggregates token balances across chains without letting any single asset
/// block or fail the rest.
///
/// Results are zipped back onto their source definitions positionally, so
/// output order always mirrors input order regardless of completion order:
/// chains in first-appearance order, tokens within a chain in input order.
#[derive(Debug, Clone)]
pub struct TokenBalanceAggregator<T, B, O> {
    transport: T,
    batcher: B,
    oracle: O,
}

impl<T, B, O> TokenBalanceAggregator<T, B, O>
where
    T: Transport,
    B: CallBatcher,
    O: BatchCapabilityOracle,
{
    /// Create an aggregator over the given collaborators.
    pub fn new(transport: T, batcher: B, oracle: O) -> Self {
        Self {
            transport,
            batcher,
            oracle,
        }
    }

    /// Fetch `owner`'s balance for every token in `tokens`.
    ///
    /// Total: per-token and per-chain failures degrade to zero balances in
    /// place and are recorded through tracing only. The output contains
    /// exactly one entry per input token, in input group order.
    pub async fn token_balances(
        &self,
        owner: Address,
        tokens: &[TokenDefinition],
    ) -> Vec<TokenBalance> {
        let span = spans::token_balances(owner, tokens.len());
        self.token_balances_inner(owner, tokens).instrument(span).await
    }

    async fn token_balances_inner(
        &self,
        owner: Address,
        tokens: &[TokenDefinition],
    ) -> Vec<TokenBalance> {
        let groups = group_by_chain(tokens);

        let per_chain = groups.into_iter().map(|(chain_id, group)| {
            let batched = self.oracle.supports_batching(chain_id);
            let span = spans::chain_token_balances(chain_id, batched, group.len());
            async move {
                if batched {
                    self.batched_chain_balances(owner, chain_id, group).await
                } else {
                    self.individual_chain_balances(owner, chain_id, group).await
                }
            }
            .instrument(span)
        });

        join_all(per_chain).await.into_iter().flatten().collect()
    }

    /// Batched path: one submission for the whole chain group, outcomes
    /// zipped back by position.
    async fn batched_chain_balances(
        &self,
        owner: Address,
        chain_id: ChainId,
        tokens: Vec<TokenDefinition>,
    ) -> Vec<TokenBalance> {
        let calls: Vec<BatchCall> = tokens
            .iter()
            .map(|token| BatchCall {
                target: token.address,
                calldata: balance_of_calldata(owner),
            })
            .collect();

        let outcomes = match self.batcher.call_batch(chain_id, &calls).await {
            Ok(outcomes) => outcomes,
            Err(e) => {
                warn!(
                    chain_id,
                    error = %e,
                    "Batched balance call failed, substituting zero for the whole chain group"
                );
                return tokens.into_iter().map(TokenBalance::zero).collect();
            }
        };

        if outcomes.len() != tokens.len() {
            warn!(
                chain_id,
                expected = tokens.len(),
                got = outcomes.len(),
                "Batch outcome count mismatch, missing entries become zero"
            );
        }

        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| match outcomes.get(i) {
                Some(BatchCallOutcome {
                    success: true,
                    return_data,
                }) => match decode_balance_return(return_data) {
                    Ok(raw) => TokenBalance::from_raw(token, raw),
                    Err(e) => {
                        warn!(
                            chain_id,
                            token = %token.address,
                            error = %e,
                            "Undecodable balance return, substituting zero"
                        );
                        TokenBalance::zero(token)
                    }
                },
                Some(_) => {
                    warn!(
                        chain_id,
                        token = %token.address,
                        "Balance call failed within batch, substituting zero"
                    );
                    TokenBalance::zero(token)
                }
                None => TokenBalance::zero(token),
            })
            .collect()
    }

    /// Fallback path: independent concurrent calls, one per token.
    async fn individual_chain_balances(
        &self,
        owner: Address,
        chain_id: ChainId,
        tokens: Vec<TokenDefinition>,
    ) -> Vec<TokenBalance> {
        let per_token = tokens.into_iter().map(|token| async move {
            match self.balance_of(chain_id, token.address, owner).await {
                Ok(raw) => TokenBalance::from_raw(token, raw),
                Err(e) => {
                    warn!(
                        chain_id,
                        token = %token.address,
                        error = %e,
                        "Balance call failed, substituting zero"
                    );
                    TokenBalance::zero(token)
                }
            }
        });

        join_all(per_token).await
    }

    async fn balance_of(
        &self,
        chain_id: ChainId,
        token: Address,
        owner: Address,
    ) -> Result<U256, RpcError> {
        let params = json!([
            {
                "to": token,
                "data": format!("0x{}", alloy_primitives::hex::encode(balance_of_calldata(owner))),
            },
            "latest",
        ]);

        let response = self.transport.request(chain_id, "eth_call", params).await?;
        let raw = bytes_from_value("eth_call", response)?;
        decode_balance_return(&raw)
            .map_err(|e| RpcError::invalid_response("eth_call", format!("balanceOf: {e}")))
    }
}
