// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Balance aggregation.
//!
//! This module coordinates balance retrieval across chains and assets so
//! that one slow or failing asset never blocks the rest:
//!
//! - [`group_by_chain`] partitions a flat token list into per-chain groups
//! - [`TokenBalanceAggregator`] resolves each group through either a batched
//!   call or independent per-token calls
//! - [`NativeBalanceFetcher`] fans native-coin queries out across chains
//! - [`BalanceService`] composes the above into the public facade
//!
//! Every per-item failure degrades to a zero balance in place; aggregate
//! operations are total and never reject on an RPC outcome.

mod grouping;
mod native;
mod service;
mod tokens;

pub use grouping::group_by_chain;
pub use native::NativeBalanceFetcher;
pub use service::BalanceService;
pub use tokens::TokenBalanceAggregator;
