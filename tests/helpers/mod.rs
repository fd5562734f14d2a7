// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for walletscan integration tests
//!
//! Provides mock implementations of the transport and batching seams to
//! enable testing without real blockchain connections.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;

use alloy_primitives::{Bytes, ChainId, U256};
use async_trait::async_trait;
use serde_json::Value;
use walletscan::{BatchCall, BatchCallOutcome, CallBatcher, RpcError, Transport};

type TransportResponder = Box<dyn Fn(ChainId, &str, &Value) -> Result<Value, String> + Send + Sync>;

/// Mock [`Transport`] driven by a responder closure.
///
/// Records every request so tests can assert on methods, params, and call
/// counts. An `Err(message)` from the responder surfaces as
/// [`RpcError::RequestFailed`], the same shape a real transport produces.
pub struct MockTransport {
    responder: TransportResponder,
    requests: Mutex<Vec<(ChainId, String, Value)>>,
}

impl MockTransport {
    /// Create a mock answering through `responder`.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(ChainId, &str, &Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A mock where every request fails with `message`.
    pub fn failing(message: &str) -> Self {
        let message = message.to_owned();
        Self::new(move |_, _, _| Err(message.clone()))
    }

    /// Every request issued so far, in order.
    pub fn requests(&self) -> Vec<(ChainId, String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        chain_id: ChainId,
        method: &str,
        params: Value,
    ) -> Result<Value, RpcError> {
        self.requests
            .lock()
            .unwrap()
            .push((chain_id, method.to_owned(), params.clone()));
        (self.responder)(chain_id, method, &params).map_err(|message| {
            RpcError::request_failed(method, chain_id, std::io::Error::other(message))
        })
    }
}

type BatchResponder =
    Box<dyn Fn(ChainId, &[BatchCall]) -> Result<Vec<BatchCallOutcome>, String> + Send + Sync>;

/// Mock [`CallBatcher`] driven by a responder closure.
///
/// Records the chains it was invoked for, so tests can assert the batcher
/// is never touched when the capability oracle says a chain can't batch.
pub struct MockBatcher {
    responder: BatchResponder,
    invocations: Mutex<Vec<ChainId>>,
}

impl MockBatcher {
    /// Create a mock answering through `responder`.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(ChainId, &[BatchCall]) -> Result<Vec<BatchCallOutcome>, String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// A mock where every batch submission fails with `message`.
    pub fn failing(message: &str) -> Self {
        let message = message.to_owned();
        Self::new(move |_, _| Err(message.clone()))
    }

    /// Chains this batcher was invoked for, in order.
    pub fn invocations(&self) -> Vec<ChainId> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallBatcher for MockBatcher {
    async fn call_batch(
        &self,
        chain_id: ChainId,
        calls: &[BatchCall],
    ) -> Result<Vec<BatchCallOutcome>, RpcError> {
        self.invocations.lock().unwrap().push(chain_id);
        (self.responder)(chain_id, calls).map_err(|message| {
            RpcError::request_failed("call_batch", chain_id, std::io::Error::other(message))
        })
    }
}

/// A `uint256` RPC response value (`"0x..."`, zero-padded to 32 bytes) as
/// `eth_call` returns it.
pub fn encoded_uint(value: u64) -> Value {
    Value::String(format!("0x{:064x}", value))
}

/// A `uint256` as raw 32-byte return data, for batch outcomes.
pub fn uint_return_data(value: u64) -> Bytes {
    Bytes::from(U256::from(value).to_be_bytes::<32>().to_vec())
}

/// Initialize test tracing from `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
