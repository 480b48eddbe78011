use kdam::{tqdm, BarExt};
use nl_core::{
    ArticleRecord, ArticleTable, CacheStore, Config, EnrichedArticle, Error, FetchedContent,
    HeadlineSource, QueryKey, QueryParams, Result,
};
use nl_inference::SentimentClassifier;
use nl_storage::create_store;
use nl_text::TextNormalizer;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::fetcher::ContentFetcher;
use crate::http::HttpClient;
use crate::newsapi::{upstream_error, NewsApiClient};

pub type QueryCache = Arc<dyn CacheStore<QueryKey, Arc<Value>>>;

/// Runs a headlines query and enriches every article with its content,
/// cleaned text and sentiment.
pub struct ArticleBatchProcessor {
    headlines: Arc<dyn HeadlineSource>,
    fetcher: ContentFetcher,
    normalizer: TextNormalizer,
    classifier: SentimentClassifier,
    query_cache: QueryCache,
    show_progress: bool,
}

impl ArticleBatchProcessor {
    pub fn new(
        headlines: Arc<dyn HeadlineSource>,
        fetcher: ContentFetcher,
        normalizer: TextNormalizer,
        classifier: SentimentClassifier,
    ) -> Result<Self> {
        Ok(Self {
            headlines,
            fetcher,
            normalizer,
            classifier,
            query_cache: create_store("memory", "queries")?,
            show_progress: false,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(&config.http)?;
        let processor = Self::new(
            Arc::new(NewsApiClient::new(http, &config.news_api)),
            ContentFetcher::from_config(config)?,
            TextNormalizer::from_config(config)?,
            SentimentClassifier::from_config(config)?,
        )?;
        Ok(processor.with_progress(config.show_progress))
    }

    pub fn with_query_cache(mut self, cache: QueryCache) -> Self {
        self.query_cache = cache;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    pub fn query_cache(&self) -> &QueryCache {
        &self.query_cache
    }

    /// Builds a fresh table for `params`. Only failures of the upstream query
    /// itself are errors; per-article failures end up in the table as empty
    /// or placeholder content.
    pub async fn run_query(&self, params: &QueryParams) -> Result<ArticleTable> {
        let document = self.query_document(params).await?;
        let records = parse_articles(&document);
        info!("📰 {} articles from {}", records.len(), params.endpoint().path());

        let contents = self.fetch_contents(&records).await;

        let mut pending = Vec::with_capacity(records.len());
        for record in records {
            let content = contents.get(&record.url);
            let content_type = content.map(|c| c.content_type);
            let content_text = content.map(|c| c.text.clone()).unwrap_or_default();
            let sentiment = self.classifier.classify(&content_text);
            pending.push((record, content_type, content_text, sentiment));
        }

        let texts: Vec<&str> = pending.iter().map(|(_, _, text, _)| text.as_str()).collect();
        let cleaned = self.normalizer.normalize(&texts);

        let articles = pending
            .into_iter()
            .zip(cleaned)
            .map(
                |((record, content_type, content_text, sentiment), content_text_cleaned)| EnrichedArticle {
                    record,
                    content_type,
                    content_text,
                    content_text_cleaned,
                    sentiment,
                },
            )
            .collect();

        let table = ArticleTable::new(articles);
        info!("✨ Enriched {} articles", table.len());
        Ok(table)
    }

    async fn query_document(&self, params: &QueryParams) -> Result<Arc<Value>> {
        let key = params.canonical_key();
        let headlines = &self.headlines;
        let populate = Box::pin(async move {
            let document = headlines.fetch(params).await?;
            if let Some(message) = upstream_error(&document) {
                return Err(Error::Upstream(message));
            }
            Ok::<_, Error>(Arc::new(document))
        });
        self.query_cache.get_or_populate(key, populate).await
    }

    /// Fetches every distinct non-empty URL once, in first-seen order.
    async fn fetch_contents(&self, records: &[ArticleRecord]) -> HashMap<String, FetchedContent> {
        let mut seen = HashSet::new();
        let urls: Vec<&str> = records
            .iter()
            .map(|r| r.url.as_str())
            .filter(|url| !url.is_empty() && seen.insert(*url))
            .collect();

        let mut bar = self
            .show_progress
            .then(|| tqdm!(total = urls.len(), desc = "Fetching content"));

        let mut contents = HashMap::with_capacity(urls.len());
        for url in urls {
            let content = self.fetcher.fetch_content(url).await;
            debug!("{} -> {} ({} chars)", url, content.content_type, content.text.len());
            contents.insert(url.to_string(), content);
            if let Some(bar) = bar.as_mut() {
                if let Err(e) = bar.update(1) {
                    debug!("Progress bar update failed: {}", e);
                }
            }
        }
        if bar.is_some() {
            eprintln!();
        }
        contents
    }
}

/// Article records of an upstream document, in upstream order. A document
/// without an `articles` list yields no records.
pub fn parse_articles(document: &Value) -> Vec<ArticleRecord> {
    match document.get("articles").and_then(Value::as_array) {
        Some(articles) => articles.iter().map(ArticleRecord::from_json).collect(),
        None => {
            warn!("Upstream response has no articles list");
            Vec::new()
        }
    }
}
