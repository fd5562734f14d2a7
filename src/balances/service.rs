// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The balance facade.

use alloy_primitives::{Address, ChainId};

use crate::batch::{BatchCapabilityOracle, CallBatcher, Multicall3Batcher};
use crate::config::WalletscanConfig;
use crate::transport::Transport;
use crate::types::{CurrencyBalance, TokenBalance, TokenDefinition};

use super::{NativeBalanceFetcher, TokenBalanceAggregator};

/// Facade over balance aggregation: native currency balances and token
/// balances behind one type.
///
/// Both operations are total. Degraded entries are present as zeros rather
/// than surfaced as errors; tracing is the only record of degradation.
///
/// # Example
///
/// ```rust,ignore
/// use walletscan::{BalanceService, HttpTransport, StaticCapabilityOracle};
///
/// let transport = HttpTransport::from_config(&config);
/// let service = BalanceService::with_multicall(
///     transport,
///     StaticCapabilityOracle::new([1, 10, 137]),
/// );
///
/// let holdings = service.token_balances(owner, &tokens).await;
/// let native = service.currency_balances(owner, &[1, 10, 137]).await;
/// ```
#[derive(Debug, Clone)]
pub struct BalanceService<T, B, O> {
    tokens: TokenBalanceAggregator<T, B, O>,
    native: NativeBalanceFetcher<T>,
}

impl<T, B, O> BalanceService<T, B, O>
where
    T: Transport + Clone,
    B: CallBatcher,
    O: BatchCapabilityOracle,
{
    /// Compose a service from its collaborators.
    pub fn new(transport: T, batcher: B, oracle: O) -> Self {
        Self {
            native: NativeBalanceFetcher::new(transport.clone()),
            tokens: TokenBalanceAggregator::new(transport, batcher, oracle),
        }
    }

    /// Apply the native-decimals override from a [`WalletscanConfig`].
    pub fn with_config(mut self, config: &WalletscanConfig) -> Self {
        self.native = self.native.with_native_decimals(config.native_decimals);
        self
    }

    /// Native coin balance for `address` on each chain, one entry per input
    /// chain in input order.
    pub async fn currency_balances(
        &self,
        address: Address,
        chains: &[ChainId],
    ) -> Vec<CurrencyBalance> {
        self.native.currency_balances(address, chains).await
    }

    /// Balance of every token in `tokens` held by `owner`, grouped by chain
    /// in first-appearance order.
    pub async fn token_balances(
        &self,
        owner: Address,
        tokens: &[TokenDefinition],
    ) -> Vec<TokenBalance> {
        self.tokens.token_balances(owner, tokens).await
    }
}

impl<T, O> BalanceService<T, Multicall3Batcher<T>, O>
where
    T: Transport + Clone,
    O: BatchCapabilityOracle,
{
    /// Compose a service whose batched path runs through the canonical
    /// Multicall3 aggregator on the same transport.
    pub fn with_multicall(transport: T, oracle: O) -> Self {
        let batcher = Multicall3Batcher::new(transport.clone());
        Self::new(transport, batcher, oracle)
    }
}
