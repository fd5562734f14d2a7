// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Native currency balance fetching.

use alloy_primitives::{Address, ChainId, U256};
use futures::future::join_all;
use serde_json::json;
use tracing::{warn, Instrument};

use crate::config::constants::DEFAULT_NATIVE_DECIMALS;
use crate::errors::RpcError;
use crate::spans;
use crate::transport::{quantity_from_value, Transport};
use crate::types::{Balance, CurrencyBalance};

/// Fetches native coin balances for a set of chains in parallel, isolating
/// per-chain failures.
///
/// The output always contains one entry per input chain, in input order: a
/// chain whose request fails contributes a zero balance instead of being
/// omitted.
///
/// Native currencies are assumed to carry 18 decimals. That assumption does
/// not hold universally; override it with
/// [`with_native_decimals`](Self::with_native_decimals) where it doesn't.
#[derive(Debug, Clone)]
pub struct NativeBalanceFetcher<T> {
    transport: T,
    native_decimals: u8,
}

impl<T> NativeBalanceFetcher<T>
where
    T: Transport,
{
    /// Create a fetcher with the default 18-decimal assumption.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            native_decimals: DEFAULT_NATIVE_DECIMALS,
        }
    }

    /// Override the native-currency decimal assumption.
    pub fn with_native_decimals(mut self, decimals: u8) -> Self {
        self.native_decimals = decimals;
        self
    }

    /// Fetch `address`'s native balance on every chain in `chains`.
    ///
    /// Total: a failed request degrades to a zero balance tagged with the
    /// same chain id, recorded through tracing only.
    pub async fn currency_balances(
        &self,
        address: Address,
        chains: &[ChainId],
    ) -> Vec<CurrencyBalance> {
        let span = spans::currency_balances(address, chains.len());
        self.currency_balances_inner(address, chains)
            .instrument(span)
            .await
    }

    async fn currency_balances_inner(
        &self,
        address: Address,
        chains: &[ChainId],
    ) -> Vec<CurrencyBalance> {
        let per_chain = chains.iter().map(|&chain_id| async move {
            match self.native_balance(chain_id, address).await {
                Ok(raw) => CurrencyBalance::new(chain_id, Balance::new(raw, self.native_decimals)),
                Err(e) => {
                    warn!(
                        chain_id,
                        error = %e,
                        "Native balance request failed, substituting zero"
                    );
                    CurrencyBalance::new(chain_id, Balance::zero(self.native_decimals))
                }
            }
        });

        join_all(per_chain).await
    }

    async fn native_balance(&self, chain_id: ChainId, address: Address) -> Result<U256, RpcError> {
        let response = self
            .transport
            .request(chain_id, "eth_getBalance", json!([address, "latest"]))
            .await?;
        quantity_from_value("eth_getBalance", response)
    }
}
