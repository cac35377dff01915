//! Outbound HTTP to the content API.
//!
//! # Responsibilities
//! - Fetch dynamic page JSON with a hard deadline on every request
//! - Retry transient failures with jittered exponential backoff
//! - Decode the response into a `ContentPage`
//!
//! # Design Decisions
//! - Page fetches are GETs, so retrying is always safe
//! - Connect/timeout errors and 5xx are retryable; 4xx and decode errors
//!   are not
//! - The fetcher is a trait so navigation logic never touches the network
//!   in unit tests

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::render::ContentPage;

/// Source of dynamic page data.
pub trait PageFetcher: Send + Sync {
    /// Fetch and decode the content page at `url`.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<ContentPage, FetchError>> + Send;
}

/// Reqwest-backed fetcher with timeout and bounded retry.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn try_fetch(&self, url: &str) -> Result<ContentPage, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<ContentPage, FetchError> {
        let retries = &self.config.retries;
        let max_attempts = if retries.enabled {
            retries.max_attempts.max(1)
        } else {
            1
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(url, attempt, "fetching content page");
            match self.try_fetch(url).await {
                Ok(page) => return Ok(page),
                Err(err) if attempt < max_attempts && is_retryable(&err) => {
                    let delay =
                        calculate_backoff(attempt, retries.base_delay_ms, retries.max_delay_ms);
                    info!(url, attempt, delay = ?delay, error = %err, "retrying content fetch");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Transient failures worth another attempt.
fn is_retryable(err: &FetchError) -> bool {
    match err {
        FetchError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        FetchError::Status { status } => *status >= 500,
        FetchError::Decode(_) => false,
    }
}

/// Exponential backoff delay with jitter (0 to 10% of the delay).
fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(max_ms);

    let jitter_range = capped_delay / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}
