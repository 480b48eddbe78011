use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How the payload behind an article URL was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "ARTICLE")]
    Article,
    #[serde(rename = "YOUTUBE VIDEO")]
    YoutubeVideo,
    #[serde(rename = "EMPTY")]
    Empty,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "ARTICLE",
            ContentType::YoutubeVideo => "YOUTUBE VIDEO",
            ContentType::Empty => "EMPTY",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ARTICLE" => Some(ContentType::Article),
            "YOUTUBE VIDEO" => Some(ContentType::YoutubeVideo),
            "EMPTY" => Some(ContentType::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Strict sign comparison against zero, no tolerance band.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted text for one URL together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedContent {
    pub text: String,
    pub content_type: ContentType,
}

impl FetchedContent {
    pub fn new(text: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            text: text.into(),
            content_type,
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), ContentType::Empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One article as reported by the headlines API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

impl ArticleRecord {
    /// Builds a record from one entry of the upstream `articles` list.
    ///
    /// Missing fields and fields of the wrong type become absent (or the empty
    /// string for `url`) instead of failing the whole batch.
    pub fn from_json(value: &Value) -> Self {
        let source = match value.get("source") {
            Some(Value::Object(obj)) => ArticleSource {
                id: obj.get("id").and_then(string_field),
                name: obj.get("name").and_then(string_field),
            },
            Some(Value::String(name)) => ArticleSource {
                id: None,
                name: Some(name.clone()),
            },
            _ => ArticleSource::default(),
        };

        Self {
            source,
            author: value.get("author").and_then(string_field),
            title: value.get("title").and_then(string_field),
            description: value.get("description").and_then(string_field),
            url: value.get("url").and_then(string_field).unwrap_or_default(),
            url_to_image: value.get("urlToImage").and_then(string_field),
            published_at: value.get("publishedAt").and_then(string_field),
            content: value.get("content").and_then(string_field),
        }
    }

    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn string_field(value: &Value) -> Option<String> {
    value.as_str().map(|s| s.to_string())
}
