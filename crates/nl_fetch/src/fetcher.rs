use nl_core::{
    transcript_placeholder, CacheStore, Config, ContentType, Error, FetchedContent, PageSource,
    Result, TranscriptSegment, TranscriptSource,
};
use nl_storage::create_store;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::extract::{extract_article_text, extract_video_id, is_video_url};
use crate::http::{HttpClient, HttpPageSource};
use crate::transcript::YoutubeTranscriptSource;

pub type ContentCache = Arc<dyn CacheStore<String, FetchedContent>>;

/// Resolves an article URL to its text and content type, at most once per URL.
#[derive(Clone)]
pub struct ContentFetcher {
    pages: Arc<dyn PageSource>,
    transcripts: Arc<dyn TranscriptSource>,
    cache: ContentCache,
}

impl ContentFetcher {
    pub fn new(
        pages: Arc<dyn PageSource>,
        transcripts: Arc<dyn TranscriptSource>,
        cache: ContentCache,
    ) -> Self {
        Self {
            pages,
            transcripts,
            cache,
        }
    }

    pub fn with_memory_cache(pages: Arc<dyn PageSource>, transcripts: Arc<dyn TranscriptSource>) -> Result<Self> {
        Ok(Self::new(pages, transcripts, create_store("memory", "content")?))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(&config.http)?;
        Self::with_memory_cache(
            Arc::new(HttpPageSource::new(http.clone())),
            Arc::new(YoutubeTranscriptSource::new(http)),
        )
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Never fails: network errors become empty content and transcript
    /// errors become a placeholder text. Either outcome is cached.
    pub async fn fetch_content(&self, url: &str) -> FetchedContent {
        let populate = Box::pin(async move { Ok::<_, Error>(self.fetch_uncached(url).await) });
        match self.cache.get_or_populate(url.to_string(), populate).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Content cache failed for {}: {}", url, e);
                FetchedContent::empty()
            }
        }
    }

    async fn fetch_uncached(&self, url: &str) -> FetchedContent {
        debug!("🌐 Fetching {}", url);
        let page = match self.pages.get(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return FetchedContent::empty();
            }
        };

        if is_video_url(&page.final_url) {
            return self.fetch_transcript(&page.final_url).await;
        }

        let text = extract_article_text(&page.body);
        if text.is_empty() {
            debug!("No article text in {}", page.final_url);
            return FetchedContent::empty();
        }
        FetchedContent::new(text, ContentType::Article)
    }

    async fn fetch_transcript(&self, video_url: &str) -> FetchedContent {
        let Some(video_id) = extract_video_id(video_url) else {
            warn!("No video id in {}", video_url);
            return FetchedContent::empty();
        };

        match self.transcripts.transcript(&video_id).await {
            Ok(segments) => FetchedContent::new(join_segments(&segments), ContentType::YoutubeVideo),
            Err(e) => {
                warn!("Transcript unavailable for {}: {}", video_id, e);
                FetchedContent::new(transcript_placeholder(&e), ContentType::YoutubeVideo)
            }
        }
    }
}

pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nl_core::{FetchedPage, TranscriptError};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakePages {
        pages: HashMap<String, FetchedPage>,
        calls: AtomicUsize,
    }

    impl FakePages {
        fn with(mut self, url: &str, final_url: &str, body: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                FetchedPage {
                    final_url: final_url.to_string(),
                    body: body.to_string(),
                },
            );
            self
        }
    }

    #[async_trait]
    impl PageSource for FakePages {
        async fn get(&self, url: &str) -> Result<FetchedPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages.get(url).cloned().ok_or_else(|| Error::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    struct FakeTranscripts(std::result::Result<Vec<TranscriptSegment>, TranscriptError>);

    #[async_trait]
    impl TranscriptSource for FakeTranscripts {
        async fn transcript(&self, _video_id: &str) -> std::result::Result<Vec<TranscriptSegment>, TranscriptError> {
            self.0.clone()
        }
    }

    fn segment(text: &str) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }
    }

    fn fetcher(pages: FakePages, transcripts: FakeTranscripts) -> (ContentFetcher, Arc<FakePages>) {
        let pages = Arc::new(pages);
        let fetcher = ContentFetcher::with_memory_cache(pages.clone(), Arc::new(transcripts)).unwrap();
        (fetcher, pages)
    }

    #[tokio::test]
    async fn test_article_fetched_once() {
        let (fetcher, pages) = fetcher(
            FakePages::default().with("https://a.test/1", "https://a.test/1", "<p>Hello</p><p>there</p>"),
            FakeTranscripts(Ok(vec![])),
        );

        let first = fetcher.fetch_content("https://a.test/1").await;
        let second = fetcher.fetch_content("https://a.test/1").await;
        assert_eq!(first, FetchedContent::new("Hello there", ContentType::Article));
        assert_eq!(first, second);
        assert_eq!(pages.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_redirect_to_video_uses_transcript() {
        let (fetcher, _) = fetcher(
            FakePages::default().with(
                "https://news.test/video",
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "<p>player page</p>",
            ),
            FakeTranscripts(Ok(vec![segment("never gonna"), segment("give you up")])),
        );

        let content = fetcher.fetch_content("https://news.test/video").await;
        assert_eq!(content.content_type, ContentType::YoutubeVideo);
        assert_eq!(content.text, "never gonna give you up");
    }

    #[tokio::test]
    async fn test_transcript_failure_becomes_placeholder() {
        let (fetcher, _) = fetcher(
            FakePages::default().with("https://youtu.be/dQw4w9WgXcQ", "https://youtu.be/dQw4w9WgXcQ", ""),
            FakeTranscripts(Err(TranscriptError::Disabled)),
        );

        let content = fetcher.fetch_content("https://youtu.be/dQw4w9WgXcQ").await;
        assert_eq!(
            content,
            FetchedContent::new("Transcripts are disabled for this video.", ContentType::YoutubeVideo)
        );
    }

    #[tokio::test]
    async fn test_video_without_id_is_empty() {
        let (fetcher, _) = fetcher(
            FakePages::default().with(
                "https://www.youtube.com/channel/UC1",
                "https://www.youtube.com/channel/UC1",
                "<p>channel</p>",
            ),
            FakeTranscripts(Ok(vec![segment("unused")])),
        );

        let content = fetcher.fetch_content("https://www.youtube.com/channel/UC1").await;
        assert_eq!(content, FetchedContent::empty());
    }

    #[tokio::test]
    async fn test_network_failure_is_empty_and_cached() {
        let (fetcher, pages) = fetcher(FakePages::default(), FakeTranscripts(Ok(vec![])));

        let content = fetcher.fetch_content("https://down.test/").await;
        assert_eq!(content, FetchedContent::empty());
        fetcher.fetch_content("https://down.test/").await;
        assert_eq!(pages.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetcher.cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_page_without_text_is_empty() {
        let (fetcher, _) = fetcher(
            FakePages::default().with("https://a.test/blank", "https://a.test/blank", "<div>menu</div>"),
            FakeTranscripts(Ok(vec![])),
        );
        assert_eq!(fetcher.fetch_content("https://a.test/blank").await, FetchedContent::empty());
    }
}
