//! Pulling readable text and video ids out of fetched pages.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

lazy_static! {
    static ref VIDEO_ID: Regex =
        Regex::new(r"(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
            .unwrap();
    static ref ARTICLE: Selector = Selector::parse("article").unwrap();
    static ref PARAGRAPH: Selector = Selector::parse("p").unwrap();
}

/// True when `url` points at a video page: `youtu.be`, or `youtube.com` and
/// its subdomains. Unparsable input falls back to a substring check.
pub fn is_video_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                let host = host.to_ascii_lowercase();
                host == "youtu.be" || host == "youtube.com" || host.ends_with(".youtube.com")
            }
            None => false,
        },
        Err(_) => url.contains("youtube.com"),
    }
}

pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text of the first `<article>` element, trimmed. Without one, the trimmed
/// text of every `<p>` in document order, joined by single spaces.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Some(article) = document.select(&ARTICLE).next() {
        return article.text().collect::<String>().trim().to_string();
    }

    document
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
