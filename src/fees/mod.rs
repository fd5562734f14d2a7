// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! EIP-1559 fee estimation.
//!
//! [`GasFeeEstimator`] converts a sliding window of recent block history
//! into a forward-looking fee structure, falling back to configured defaults
//! whenever history is unavailable. [`shape_fee_history`] exposes the
//! history-shaping step on its own.

mod estimator;
mod history;

pub use estimator::GasFeeEstimator;
pub use history::shape_fee_history;
