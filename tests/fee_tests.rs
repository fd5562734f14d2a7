// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for fee estimation: history-derived estimates, the
//! degraded fallback path, and gas-limit simulation.

mod helpers;

use std::sync::Arc;

use alloy_primitives::U256;
use alloy_rpc_types::TransactionRequest;
use helpers::MockTransport;
use serde_json::{json, Value};
use walletscan::{GasFeeEstimator, RpcError, WalletscanConfig};

const GWEI: u64 = 1_000_000_000;

/// Build an `eth_feeHistory` response. `base_fees` carries one more entry
/// than `ratios`: the trailing element is the upcoming block's base fee.
fn fee_history_response(base_fees: &[u64], ratios: &[f64], rewards: Option<&[u64]>) -> Value {
    let mut body = json!({
        "oldestBlock": "0x1",
        "baseFeePerGas": base_fees.iter().map(|f| format!("{f:#x}")).collect::<Vec<_>>(),
        "gasUsedRatio": ratios,
    });
    if let Some(rewards) = rewards {
        body["reward"] = json!(rewards
            .iter()
            .map(|r| vec![format!("{r:#x}")])
            .collect::<Vec<_>>());
    }
    body
}

/// Ten mined blocks at 100 wei base fee, next block projected at 110.
/// Blocks 0-2 are eligible with rewards [4, 2, 3]; the rest sit outside the
/// gas-used-ratio interval.
fn representative_history() -> Value {
    let base_fees = [100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 110];
    let ratios = [0.5, 0.5, 0.5, 0.05, 0.95, 0.05, 0.95, 0.05, 0.95, 0.05];
    let rewards = [4, 2, 3, 99, 99, 99, 99, 99, 99, 99];
    fee_history_response(&base_fees, &ratios, Some(&rewards))
}

#[tokio::test]
async fn estimates_headroom_and_lower_median_reward() {
    let transport = Arc::new(MockTransport::new(|_, _, _| Ok(representative_history())));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    // ceil(110 * 1.125^2) = 140; lower median of [2, 3, 4] = 3
    assert_eq!(fees.max_base_fee_per_gas, U256::from(140u64));
    assert_eq!(fees.max_priority_fee_per_gas, U256::from(3u64));
    assert_eq!(fees.max_fee_per_gas, U256::from(143u64));
}

#[tokio::test]
async fn samples_ten_blocks_at_tenth_percentile() {
    let transport = Arc::new(MockTransport::new(|_, _, _| Ok(representative_history())));
    let estimator = GasFeeEstimator::new(Arc::clone(&transport), 1);

    estimator.fee_per_gas().await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let (chain_id, method, params) = &requests[0];
    assert_eq!(*chain_id, 1);
    assert_eq!(method, "eth_feeHistory");
    assert_eq!(params[0], json!("0xa"));
    assert_eq!(params[1], json!("latest"));
    assert_eq!(params[2], json!([10.0]));
}

#[tokio::test]
async fn transport_failure_falls_back_to_configured_defaults() {
    helpers::init_tracing();

    let transport = Arc::new(MockTransport::failing("node down"));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_base_fee_per_gas, U256::from(10 * GWEI));
    assert_eq!(fees.max_priority_fee_per_gas, U256::from(GWEI));
    assert_eq!(fees.max_fee_per_gas, U256::from(11 * GWEI));
}

#[tokio::test]
async fn fallback_honors_config_overrides() {
    let config = WalletscanConfig::builder()
        .default_gas_level(U256::from(25 * GWEI))
        .fallback_priority_fee(U256::from(2 * GWEI))
        .build();

    let transport = Arc::new(MockTransport::failing("node down"));
    let estimator = GasFeeEstimator::from_config(transport, 1, &config);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_base_fee_per_gas, U256::from(25 * GWEI));
    assert_eq!(fees.max_priority_fee_per_gas, U256::from(2 * GWEI));
    assert_eq!(fees.max_fee_per_gas, U256::from(27 * GWEI));
}

#[tokio::test]
async fn malformed_history_falls_back() {
    let transport = Arc::new(MockTransport::new(|_, _, _| Ok(json!("not a history"))));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_base_fee_per_gas, U256::from(10 * GWEI));
}

#[tokio::test]
async fn empty_history_falls_back() {
    let transport = Arc::new(MockTransport::new(|_, _, _| {
        Ok(fee_history_response(&[], &[], None))
    }));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_base_fee_per_gas, U256::from(10 * GWEI));
    assert_eq!(fees.max_priority_fee_per_gas, U256::from(GWEI));
}

#[tokio::test]
async fn no_eligible_blocks_defaults_priority_to_one_gwei() {
    // Valid history, but every block is nearly empty or nearly full
    let base_fees = [100, 100, 100, 110];
    let ratios = [0.01, 0.99, 0.05];
    let rewards = [7, 7, 7];
    let transport = Arc::new(MockTransport::new(move |_, _, _| {
        Ok(fee_history_response(&base_fees, &ratios, Some(&rewards)))
    }));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_base_fee_per_gas, U256::from(140u64));
    assert_eq!(fees.max_priority_fee_per_gas, U256::from(GWEI));
}

#[tokio::test]
async fn absent_reward_data_defaults_priority_to_one_gwei() {
    let base_fees = [100, 100, 100, 110];
    let ratios = [0.5, 0.5, 0.5];
    let transport = Arc::new(MockTransport::new(move |_, _, _| {
        Ok(fee_history_response(&base_fees, &ratios, None))
    }));
    let estimator = GasFeeEstimator::new(transport, 1);

    let fees = estimator.fee_per_gas().await;

    assert_eq!(fees.max_priority_fee_per_gas, U256::from(GWEI));
}

#[tokio::test]
async fn gas_estimate_parses_the_simulated_limit() {
    let transport = Arc::new(MockTransport::new(|_, method, _| {
        assert_eq!(method, "eth_estimateGas");
        Ok(json!("0x5208"))
    }));
    let estimator = GasFeeEstimator::new(transport, 1);

    let limit = estimator
        .gas_estimate(&TransactionRequest::default())
        .await
        .unwrap();
    assert_eq!(limit, U256::from(21_000u64));
}

#[tokio::test]
async fn gas_estimate_propagates_transport_errors() {
    let transport = Arc::new(MockTransport::failing("insufficient funds for gas"));
    let estimator = GasFeeEstimator::new(transport, 1);

    let err = estimator
        .gas_estimate(&TransactionRequest::default())
        .await
        .unwrap_err();

    match err {
        RpcError::RequestFailed { method, chain_id, source } => {
            assert_eq!(method, "eth_estimateGas");
            assert_eq!(chain_id, 1);
            assert!(source.to_string().contains("insufficient funds"));
        }
        other => panic!("expected RequestFailed, got {other}"),
    }
}

#[tokio::test]
async fn gas_price_returns_the_configured_default_without_network_access() {
    let transport = Arc::new(MockTransport::failing("must not be called"));
    let estimator =
        GasFeeEstimator::new(Arc::clone(&transport), 1).with_default_gas_level(U256::from(123u64));

    assert_eq!(estimator.gas_price(), U256::from(123u64));
    assert!(transport.requests().is_empty());
}
