use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TranscriptError;
use crate::query::QueryParams;
use crate::Result;

/// Response to a GET after redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchedPage>;
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcript(&self, video_id: &str) -> std::result::Result<Vec<TranscriptSegment>, TranscriptError>;
}

/// Upstream search/headlines API returning the raw JSON document.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch(&self, params: &QueryParams) -> Result<Value>;
}
