use async_trait::async_trait;
use nl_core::config::HttpConfig;
use nl_core::{Error, FetchedPage, PageSource, Result};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Shared reqwest client with the configured timeouts and retry policy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
    retry_backoff: Duration,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff(),
        })
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_query(url, &[]).await
    }

    /// GET with query parameters. Timeouts and connection failures are
    /// retried up to `max_retries` times; any response, whatever its status,
    /// is returned as is.
    pub async fn get_with_query(&self, url: &str, query: &[(String, String)]) -> Result<Response> {
        let mut attempt = 0;
        loop {
            match self.client.get(url).query(query).send().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    let error = Error::from(e);
                    if attempt >= self.max_retries || !error.is_transient() {
                        return Err(error);
                    }
                    attempt += 1;
                    warn!("Retrying {} ({}/{}): {}", url, attempt, self.max_retries, error);
                    sleep(self.retry_backoff).await;
                }
            }
        }
    }

    /// GET that fails on a non-2xx status and returns the final URL with the body.
    pub async fn get_page(&self, url: &str) -> Result<FetchedPage> {
        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await?;
        debug!("Fetched {} ({} bytes) from {}", final_url, body.len(), url);
        Ok(FetchedPage { final_url, body })
    }
}

/// [`PageSource`] over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    http: HttpClient,
}

impl HttpPageSource {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str) -> Result<FetchedPage> {
        self.http.get_page(url).await
    }
}
