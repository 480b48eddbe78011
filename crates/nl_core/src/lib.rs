pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod sources;
pub mod storage;
pub mod table;
pub mod types;

pub use config::Config;
pub use error::{transcript_placeholder, Error, Result, TranscriptError};
pub use models::PolarityModel;
pub use query::{Category, Endpoint, QueryKey, QueryParams};
pub use sources::{FetchedPage, HeadlineSource, PageSource, TranscriptSegment, TranscriptSource};
pub use storage::CacheStore;
pub use table::{ArticleTable, EnrichedArticle};
pub use types::{ArticleRecord, ArticleSource, ContentType, FetchedContent, SentimentLabel};
