// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The RPC transport seam.
//!
//! Every network interaction in this crate flows through the [`Transport`]
//! trait: a method name, a parameter list, and a target chain in; a decoded
//! JSON value or an [`RpcError`] out. Balance aggregation and fee estimation
//! are written against this seam so that failure isolation can be tested
//! without a node.
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpTransport`] - per-chain HTTP clients with retry middleware,
//!   configured from RPC endpoint URLs
//! - [`ProviderTransport`] - an adapter for callers that already hold alloy
//!   providers
//!
//! # Example
//!
//! ```rust,ignore
//! use walletscan::{HttpTransport, Transport};
//! use serde_json::json;
//! use url::Url;
//!
//! let transport = HttpTransport::builder()
//!     .endpoint(1, Url::parse("https://eth.llamarpc.com")?)
//!     .build();
//!
//! let block_number = transport.request(1, "eth_blockNumber", json!([])).await?;
//! ```

mod http;
mod provider;
mod retry;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use provider::ProviderTransport;
pub use retry::{RetryConfig, RetryLayer, RetryService};

use alloy_primitives::{Bytes, ChainId, U256};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::RpcError;

/// A JSON-RPC transport targeting one chain per request.
///
/// Implementations are expected to be cheap to share (`Arc` or internal
/// reference counting) because balance aggregation fans one transport out
/// across chains and tokens concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single JSON-RPC request against `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError`] on connectivity failures, node-side errors, or
    /// when no endpoint is configured for the chain.
    async fn request(&self, chain_id: ChainId, method: &str, params: Value)
        -> Result<Value, RpcError>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn request(
        &self,
        chain_id: ChainId,
        method: &str,
        params: Value,
    ) -> Result<Value, RpcError> {
        (**self).request(chain_id, method, params).await
    }
}

/// Interpret a response value as a hex quantity (`"0x..."`).
pub(crate) fn quantity_from_value(method: &str, value: Value) -> Result<U256, RpcError> {
    serde_json::from_value(value).map_err(|e| RpcError::invalid_response(method, e.to_string()))
}

/// Interpret a response value as hex-encoded bytes (`"0x..."`).
pub(crate) fn bytes_from_value(method: &str, value: Value) -> Result<Bytes, RpcError> {
    serde_json::from_value(value).map_err(|e| RpcError::invalid_response(method, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_parses_hex_string() {
        let value = json!("0xde0b6b3a7640000");
        let parsed = quantity_from_value("eth_getBalance", value).unwrap();
        assert_eq!(parsed, U256::from(1_000_000_000_000_000_000u128));
    }

    #[test]
    fn quantity_rejects_non_string() {
        let err = quantity_from_value("eth_getBalance", json!({"nested": true})).unwrap_err();
        assert!(matches!(err, RpcError::InvalidResponse { ref method, .. } if method == "eth_getBalance"));
    }

    #[test]
    fn bytes_parses_hex_string() {
        let value = json!("0xdeadbeef");
        let parsed = bytes_from_value("eth_call", value).unwrap();
        assert_eq!(parsed.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
    }
}
