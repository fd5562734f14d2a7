// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Transport adapter over pre-built alloy providers.
//!
//! For callers that already hold configured [`Provider`] instances (with
//! their own middleware stacks), this adapter exposes them through the
//! [`Transport`] seam instead of requiring a parallel endpoint registry.

use std::collections::HashMap;
use std::marker::PhantomData;

use alloy_network::{Ethereum, Network};
use alloy_primitives::ChainId;
use alloy_provider::Provider;
use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RpcError;

use super::Transport;

/// A [`Transport`] backed by one alloy [`Provider`] per chain.
///
/// # Example
///
/// ```rust,ignore
/// use alloy_provider::ProviderBuilder;
/// use walletscan::ProviderTransport;
///
/// let mainnet = ProviderBuilder::new().connect_http("https://eth.llamarpc.com".parse()?);
/// let transport = ProviderTransport::new().with_chain(1, mainnet);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderTransport<P, N = Ethereum> {
    providers: HashMap<ChainId, P>,
    _network: PhantomData<N>,
}

impl<P, N> ProviderTransport<P, N>
where
    P: Provider<N>,
    N: Network,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            _network: PhantomData,
        }
    }

    /// Register the provider serving a chain.
    pub fn with_chain(mut self, chain_id: ChainId, provider: P) -> Self {
        self.providers.insert(chain_id, provider);
        self
    }
}

impl<P, N> Default for ProviderTransport<P, N>
where
    P: Provider<N>,
    N: Network,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<P, N> Transport for ProviderTransport<P, N>
where
    P: Provider<N>,
    N: Network,
{
    async fn request(
        &self,
        chain_id: ChainId,
        method: &str,
        params: Value,
    ) -> Result<Value, RpcError> {
        let provider = self
            .providers
            .get(&chain_id)
            .ok_or(RpcError::UnsupportedChain { chain_id })?;

        let response: Value = provider
            .raw_request(method.to_owned().into(), params)
            .await
            .map_err(|e| RpcError::request_failed(method, chain_id, e))?;
        Ok(response)
    }
}
