// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport with a per-chain client registry.
//!
//! Each configured chain gets its own [`RpcClient`] built with the crate's
//! retry middleware. Requests against a chain with no registered endpoint
//! fail with [`RpcError::UnsupportedChain`] without touching the network.

use std::collections::HashMap;

use alloy_primitives::ChainId;
use alloy_rpc_client::{ClientBuilder, RpcClient};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::WalletscanConfig;
use crate::errors::RpcError;

use super::{RetryLayer, Transport};

/// HTTP [`Transport`] dispatching requests to per-chain RPC endpoints.
///
/// Cloning is cheap: the underlying clients are reference counted.
///
/// # Example
///
/// ```rust,ignore
/// use walletscan::HttpTransport;
/// use url::Url;
///
/// let transport = HttpTransport::builder()
///     .endpoint(1, Url::parse("https://eth.llamarpc.com")?)
///     .endpoint(137, Url::parse("https://polygon-rpc.com")?)
///     .build();
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    clients: HashMap<ChainId, RpcClient>,
}

impl HttpTransport {
    /// Create a builder with no endpoints and default retry behavior.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Build a transport from the endpoints in a [`WalletscanConfig`].
    pub fn from_config(config: &WalletscanConfig) -> Self {
        let mut builder = Self::builder();
        for (chain_id, url) in &config.endpoints {
            builder = builder.endpoint(*chain_id, url.clone());
        }
        builder.build()
    }

    /// Chains this transport can reach.
    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.clients.keys().copied()
    }

    fn client(&self, chain_id: ChainId) -> Result<&RpcClient, RpcError> {
        self.clients
            .get(&chain_id)
            .ok_or(RpcError::UnsupportedChain { chain_id })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("chains", &self.clients.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        chain_id: ChainId,
        method: &str,
        params: Value,
    ) -> Result<Value, RpcError> {
        let client = self.client(chain_id)?;
        client
            .request::<Value, Value>(method.to_owned(), params)
            .await
            .map_err(|e| RpcError::request_failed(method, chain_id, e))
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransportBuilder {
    endpoints: Vec<(ChainId, Url)>,
    retry: RetryLayer,
}

impl HttpTransportBuilder {
    /// Register the RPC endpoint for a chain. Registering a chain twice
    /// keeps the last endpoint.
    pub fn endpoint(mut self, chain_id: ChainId, url: Url) -> Self {
        self.endpoints.push((chain_id, url));
        self
    }

    /// Replace the default retry middleware.
    pub fn retry(mut self, layer: RetryLayer) -> Self {
        self.retry = layer;
        self
    }

    /// Build the transport, constructing one retrying HTTP client per
    /// registered endpoint.
    pub fn build(self) -> HttpTransport {
        let clients = self
            .endpoints
            .into_iter()
            .map(|(chain_id, url)| {
                let client = ClientBuilder::default()
                    .layer(self.retry.clone())
                    .http(url);
                (chain_id, client)
            })
            .collect();
        HttpTransport { clients }
    }
}
