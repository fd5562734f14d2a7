// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-chain wallet accounting for EVM chains.
//!
//! Walletscan answers two questions for a wallet client: what does this
//! address hold, and what does sending a transaction cost right now?
//!
//! - **Balance aggregation** ([`BalanceService`]): native currency and
//!   arbitrary token balances across many chains, batched through
//!   Multicall-style aggregation where a chain supports it and per-token
//!   calls where it doesn't. One slow or failing asset never blocks the
//!   rest: per-item failures degrade to zero balances in place, and the
//!   result set is always complete and input-ordered.
//! - **Fee estimation** ([`GasFeeEstimator`]): an EIP-1559 fee structure
//!   derived from recent block history, with base-fee headroom for two
//!   maximum-increase blocks and a priority fee taken from the lower median
//!   of low-percentile rewards. Falls back to configured defaults when
//!   history is unavailable; gas-limit simulation is the only operation
//!   that propagates errors.
//!
//! This crate is an orchestration layer above JSON-RPC; it defines no wire
//! format, loads no token lists, and caches nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use walletscan::{
//!     BalanceService, GasFeeEstimator, HttpTransport, StaticCapabilityOracle,
//!     WalletscanConfig,
//! };
//! use url::Url;
//!
//! let config = WalletscanConfig::builder()
//!     .endpoint(1, Url::parse("https://eth.llamarpc.com")?)
//!     .endpoint(137, Url::parse("https://polygon-rpc.com")?)
//!     .build();
//!
//! let transport = HttpTransport::from_config(&config);
//! let service = BalanceService::with_multicall(
//!     transport.clone(),
//!     StaticCapabilityOracle::new([1, 137]),
//! );
//!
//! let holdings = service.token_balances(owner, &tokens).await;
//! let native = service.currency_balances(owner, &[1, 137]).await;
//!
//! let estimator = GasFeeEstimator::from_config(transport, 1, &config);
//! let fees = estimator.fee_per_gas().await;
//! ```

pub mod balances;
pub mod batch;
pub mod config;
pub mod errors;
pub mod fees;
pub mod transport;
pub mod types;

pub(crate) mod spans;

pub use balances::{group_by_chain, BalanceService, NativeBalanceFetcher, TokenBalanceAggregator};
pub use batch::{
    BatchCall, BatchCallOutcome, BatchCapabilityOracle, CallBatcher, Multicall3Batcher,
    StaticCapabilityOracle,
};
pub use config::{WalletscanConfig, WalletscanConfigBuilder};
pub use errors::{BalanceError, FeeEstimationError, RpcError, WalletscanError};
pub use fees::{shape_fee_history, GasFeeEstimator};
pub use transport::{HttpTransport, ProviderTransport, RetryConfig, RetryLayer, Transport};
pub use types::{
    Balance, CurrencyBalance, Eip1559GasFees, FeeHistoryBlock, TokenBalance, TokenDefinition,
};
