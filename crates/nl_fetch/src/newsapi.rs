use async_trait::async_trait;
use nl_core::config::NewsApiConfig;
use nl_core::{Error, HeadlineSource, QueryParams, Result};
use serde_json::Value;
use tracing::info;

use crate::http::HttpClient;

/// Client for the NewsAPI `top-headlines` and `everything` endpoints.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: HttpClient,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(http: HttpClient, config: &NewsApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint_url(&self, params: &QueryParams) -> String {
        format!("{}/{}", self.base_url, params.endpoint().path())
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    /// Returns the response document as is, including error documents.
    async fn fetch(&self, params: &QueryParams) -> Result<Value> {
        let url = self.endpoint_url(params);
        info!("📡 Querying {}", url);

        let response = self.http.get_with_query(&url, &params.pairs()).await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<Value>(&body) {
            Ok(document) => Ok(document),
            Err(_) if !status.is_success() => Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Message of an upstream error document (`{"status": "error", ...}`).
pub fn upstream_error(document: &Value) -> Option<String> {
    if document.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }
    let message = document
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    Some(match document.get("code").and_then(Value::as_str) {
        Some(code) => format!("{}: {}", code, message),
        None => message.to_string(),
    })
}
