// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for transport operations.

use alloy_primitives::ChainId;

/// Errors that can occur when issuing RPC requests against a chain.
///
/// Includes context about the method and chain involved to aid debugging.
/// Balance aggregation converts these into zero-value substitutes near the
/// call site; gas-limit estimation propagates them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The RPC request itself failed (connectivity, timeout, node error).
    #[error("RPC request {method} failed on chain {chain_id}")]
    RequestFailed {
        /// The JSON-RPC method that failed.
        method: String,
        /// The chain the request targeted.
        chain_id: ChainId,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node answered, but the response did not have the expected shape.
    #[error("Malformed response for {method}: {details}")]
    InvalidResponse {
        /// The JSON-RPC method whose response was malformed.
        method: String,
        /// What was wrong with the response.
        details: String,
    },

    /// No transport endpoint is configured for the requested chain.
    #[error("No RPC endpoint configured for chain {chain_id}")]
    UnsupportedChain {
        /// The chain with no configured endpoint.
        chain_id: ChainId,
    },
}

impl RpcError {
    /// Create a `RequestFailed` error from any underlying error type.
    pub fn request_failed(
        method: impl Into<String>,
        chain_id: ChainId,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::RequestFailed {
            method: method.into(),
            chain_id,
            source: Box::new(source),
        }
    }

    /// Create an `InvalidResponse` error with details.
    pub fn invalid_response(method: impl Into<String>, details: impl Into<String>) -> Self {
        RpcError::InvalidResponse {
            method: method.into(),
            details: details.into(),
        }
    }
}
