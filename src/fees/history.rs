// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shaping raw `eth_feeHistory` responses into per-block samples.

use alloy_rpc_types::FeeHistory;

use crate::errors::FeeEstimationError;
use crate::types::FeeHistoryBlock;

/// Shape a raw fee history response into one sample per returned block.
///
/// The response's base-fee array carries one extra trailing entry for the
/// upcoming block; only the mined blocks (as counted by `gas_used_ratio`)
/// are shaped here. A block with no reward row, or an empty one, yields an
/// absent priority fee rather than an error.
///
/// # Errors
///
/// Returns [`FeeEstimationError::EmptyHistory`] when the response contains
/// no blocks, and [`FeeEstimationError::MalformedHistory`] when the base-fee
/// array is shorter than the block count.
pub fn shape_fee_history(history: &FeeHistory) -> Result<Vec<FeeHistoryBlock>, FeeEstimationError> {
    let block_count = history.gas_used_ratio.len();
    if block_count == 0 {
        return Err(FeeEstimationError::EmptyHistory);
    }

    (0..block_count)
        .map(|i| {
            let base_fee_per_gas =
                *history.base_fee_per_gas.get(i).ok_or_else(|| {
                    FeeEstimationError::malformed_history(format!(
                        "base fee missing for block {i} of {block_count}"
                    ))
                })?;

            let priority_fee = history
                .reward
                .as_ref()
                .and_then(|rows| rows.get(i))
                .and_then(|row| row.first())
                .copied();

            Ok(FeeHistoryBlock {
                base_fee_per_gas,
                gas_used_ratio: history.gas_used_ratio[i],
                priority_fee,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history_from_json(value: serde_json::Value) -> FeeHistory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn shapes_one_sample_per_mined_block() {
        let history = history_from_json(json!({
            "oldestBlock": "0x64",
            "baseFeePerGas": ["0x64", "0x65", "0x66"],
            "gasUsedRatio": [0.4, 0.6],
            "reward": [["0x2"], ["0x3"]],
        }));

        let blocks = shape_fee_history(&history).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].base_fee_per_gas, 0x64);
        assert_eq!(blocks[0].priority_fee, Some(2));
        assert_eq!(blocks[1].base_fee_per_gas, 0x65);
        assert_eq!(blocks[1].priority_fee, Some(3));
    }

    #[test]
    fn missing_reward_rows_become_absent_samples() {
        let history = history_from_json(json!({
            "oldestBlock": "0x64",
            "baseFeePerGas": ["0x64", "0x65", "0x66"],
            "gasUsedRatio": [0.4, 0.6],
        }));

        let blocks = shape_fee_history(&history).unwrap();
        assert!(blocks.iter().all(|b| b.priority_fee.is_none()));
    }

    #[test]
    fn short_reward_rows_only_affect_their_blocks() {
        let history = history_from_json(json!({
            "oldestBlock": "0x64",
            "baseFeePerGas": ["0x64", "0x65", "0x66"],
            "gasUsedRatio": [0.4, 0.6],
            "reward": [["0x2"]],
        }));

        let blocks = shape_fee_history(&history).unwrap();
        assert_eq!(blocks[0].priority_fee, Some(2));
        assert_eq!(blocks[1].priority_fee, None);
    }

    #[test]
    fn empty_history_is_an_error() {
        let history = history_from_json(json!({
            "oldestBlock": "0x0",
            "baseFeePerGas": [],
            "gasUsedRatio": [],
        }));

        assert!(matches!(
            shape_fee_history(&history),
            Err(FeeEstimationError::EmptyHistory)
        ));
    }

    #[test]
    fn truncated_base_fees_are_malformed() {
        let history = history_from_json(json!({
            "oldestBlock": "0x64",
            "baseFeePerGas": ["0x64"],
            "gasUsedRatio": [0.4, 0.6],
        }));

        assert!(matches!(
            shape_fee_history(&history),
            Err(FeeEstimationError::MalformedHistory { .. })
        ));
    }
}
