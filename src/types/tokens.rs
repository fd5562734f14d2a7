// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token descriptors and token balances.
//!
//! [`TokenDefinition`] is an immutable descriptor supplied by an external
//! token registry; this crate never mutates it. [`TokenBalance`] enriches a
//! definition with the balance observed for one owner in one query. Balances
//! are created fresh per query and never cached here.

use alloy_primitives::{Address, ChainId, U256};
use serde::{Deserialize, Serialize};

use super::Balance;

/// Immutable descriptor of an ERC-20 token on one chain.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use walletscan::TokenDefinition;
///
/// let usdc = TokenDefinition::new(
///     1,
///     address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
///     6,
///     "USDC",
/// );
/// assert_eq!(usdc.chain_id, 1);
/// assert_eq!(usdc.decimals, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDefinition {
    /// Chain the token contract is deployed on.
    pub chain_id: ChainId,
    /// Token contract address.
    pub address: Address,
    /// Decimal precision of the token.
    pub decimals: u8,
    /// Ticker symbol. Opaque metadata, passed through unchanged.
    pub symbol: String,
    /// Optional human-readable name. Opaque metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TokenDefinition {
    /// Create a token definition.
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: None,
        }
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A token definition enriched with its observed balance.
///
/// The balance always carries the token's own decimal precision, and the
/// chain id of a `TokenBalance` is by construction the chain id of its
/// source definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// The token this balance belongs to.
    pub token: TokenDefinition,
    /// The observed balance.
    pub balance: Balance,
}

impl TokenBalance {
    /// Build a token balance from a raw on-chain amount.
    pub fn from_raw(token: TokenDefinition, raw: U256) -> Self {
        let balance = Balance::new(raw, token.decimals);
        Self { token, balance }
    }

    /// Zero balance for a token whose value could not be observed.
    pub fn zero(token: TokenDefinition) -> Self {
        let balance = Balance::zero(token.decimals);
        Self { token, balance }
    }

    /// Chain the token lives on.
    pub const fn chain_id(&self) -> ChainId {
        self.token.chain_id
    }
}
