//! Fetch Module
//!
//! The caller-supplied producer of non-local values, plus the timeout
//! boundary that wraps it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

// == Fetch Trait ==
/// Produces the payload for a key from its source of truth.
///
/// Implemented for any `Fn(String) -> Future<Output = anyhow::Result<String>>`,
/// so plain async closures can be handed to the cache.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, key: &str) -> anyhow::Result<String>;
}

#[async_trait]
impl<F, Fut> Fetch for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    async fn fetch(&self, key: &str) -> anyhow::Result<String> {
        (self)(key.to_string()).await
    }
}

// == Timeout ==
/// Raised when a fetch does not complete within its time budget.
#[derive(Error, Debug)]
#[error("Fetch for key '{key}' timed out after {timeout:?}")]
pub struct FetchTimeout {
    pub key: String,
    pub timeout: Duration,
}

/// A [`Fetch`] bounded by a fixed timeout.
#[derive(Debug, Clone)]
pub struct TimeoutFetch<F> {
    inner: F,
    timeout: Duration,
}

/// Bounds `fetch` so that it rejects with [`FetchTimeout`] after `timeout`.
pub fn with_timeout<F: Fetch>(fetch: F, timeout: Duration) -> TimeoutFetch<F> {
    TimeoutFetch {
        inner: fetch,
        timeout,
    }
}

#[async_trait]
impl<F: Fetch> Fetch for TimeoutFetch<F> {
    async fn fetch(&self, key: &str) -> anyhow::Result<String> {
        match tokio::time::timeout(self.timeout, self.inner.fetch(key)).await {
            Ok(result) => result,
            Err(_) => Err(FetchTimeout {
                key: key.to_string(),
                timeout: self.timeout,
            }
            .into()),
        }
    }
}
