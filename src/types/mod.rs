// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for wallet accounting values.
//!
//! The raw on-chain value is always the authoritative representation;
//! human-readable decimal strings are derived on demand and never stored.

mod balance;
mod fees;
mod tokens;

pub use balance::{Balance, CurrencyBalance};
pub use fees::{Eip1559GasFees, FeeHistoryBlock};
pub use tokens::{TokenBalance, TokenDefinition};
