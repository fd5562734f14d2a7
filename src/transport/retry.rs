// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Tower retry middleware for the HTTP transport.
//!
//! Wraps each RPC request and retries transient failures with exponential
//! backoff. Applied by default to every client built by
//! [`HttpTransportBuilder`](super::HttpTransportBuilder); callers needing a
//! different policy supply their own layer.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket, RpcError as JsonRpcError};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, warn};

const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(250);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(8);

/// Retry policy: attempt `n` backs off for `min(base_delay * 2^n, max_delay)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retry attempts after the initial request.
    pub max_retries: u32,
    /// Backoff delay before the first retry.
    pub base_delay: Duration,
    /// Cap on the backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

/// A Tower layer adding retry-with-backoff to RPC transports.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use walletscan::RetryLayer;
///
/// let layer = RetryLayer::new()
///     .max_retries(4)
///     .base_delay(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryLayer {
    config: RetryConfig,
}

impl RetryLayer {
    /// Create a layer with the default policy (2 retries, 250ms base
    /// delay, 8s cap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer that never retries.
    pub fn disabled() -> Self {
        Self::new().max_retries(0)
    }

    /// Set the maximum number of retry attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the backoff delay before the first retry.
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.base_delay = delay;
        self
    }

    /// Set the cap on the backoff delay.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.config.max_delay = delay;
        self
    }
}

impl<S> Layer<S> for RetryLayer {
    type Service = RetryService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RetryService {
            service,
            config: self.config,
        }
    }
}

/// The service produced by [`RetryLayer`].
#[derive(Debug, Clone)]
pub struct RetryService<S> {
    service: S,
    config: RetryConfig,
}

impl<S> tower::Service<RequestPacket> for RetryService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let service = self.service.clone();
        let config = self.config;

        Box::pin(async move {
            let mut attempt = 0u32;
            loop {
                let mut service = service.clone();
                let error = match service.call(request.clone()).await {
                    Ok(response) => {
                        if attempt > 0 {
                            debug!(attempt, "RPC request succeeded after retry");
                        }
                        return Ok(response);
                    }
                    Err(error) => error,
                };

                if !is_retryable(&error) || attempt >= config.max_retries {
                    return Err(error);
                }

                let delay = backoff_delay(attempt, &config);
                warn!(
                    error = %error,
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying RPC request"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        })
    }
}

/// `min(base_delay * 2^attempt, max_delay)`, saturating.
fn backoff_delay(attempt: u32, config: &RetryConfig) -> Duration {
    let scaled = config
        .base_delay
        .as_millis()
        .saturating_mul(2u128.saturating_pow(attempt));
    Duration::from_millis(scaled.min(config.max_delay.as_millis()) as u64)
}

/// Transient failures are retried; malformed requests are not.
fn is_retryable(error: &TransportError) -> bool {
    match error {
        JsonRpcError::Transport(kind) => kind.is_retry_err(),
        JsonRpcError::ErrorResp(payload) => payload.is_retry_err(),
        // The request serialized locally but the node's answer didn't parse;
        // a different node behind the same endpoint may answer correctly.
        JsonRpcError::DeserError { .. } => true,
        JsonRpcError::NullResp => true,
        JsonRpcError::SerError(_) => false,
        _ => false,
    }
}
