//! Content acquisition: HTTP and transcript sources, the headlines client,
//! the cached content fetcher and the batch processor tying them together.

pub mod extract;
pub mod fetcher;
pub mod http;
pub mod logging;
pub mod manager;
pub mod newsapi;
pub mod transcript;

pub use fetcher::ContentFetcher;
pub use http::{HttpClient, HttpPageSource};
pub use logging::init_logging;
pub use manager::ArticleBatchProcessor;
pub use newsapi::NewsApiClient;
pub use transcript::YoutubeTranscriptSource;

pub mod prelude {
    pub use super::fetcher::ContentFetcher;
    pub use super::manager::{parse_articles, ArticleBatchProcessor};
    pub use super::newsapi::NewsApiClient;
    pub use nl_core::{
        ArticleTable, Config, ContentType, Error, FetchedContent, QueryParams, Result, SentimentLabel,
    };
    pub use nl_inference::SentimentClassifier;
    pub use nl_text::TextNormalizer;
}
