use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::types::{ArticleRecord, ContentType, SentimentLabel};

/// An [`ArticleRecord`] plus everything derived from its URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    #[serde(flatten)]
    pub record: ArticleRecord,
    /// `None` when the URL produced no content mapping; serialized as `""`.
    #[serde(with = "content_type_label", default)]
    pub content_type: Option<ContentType>,
    pub content_text: String,
    pub content_text_cleaned: String,
    pub sentiment: SentimentLabel,
}

impl EnrichedArticle {
    pub fn content_type_label(&self) -> &'static str {
        self.content_type.map(|t| t.as_str()).unwrap_or("")
    }
}

mod content_type_label {
    use super::ContentType;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<ContentType>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|t| t.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ContentType>, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().and_then(ContentType::from_label))
    }
}

/// Result of one query run, in upstream order. Indices are stable for the
/// lifetime of the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleTable {
    articles: Vec<EnrichedArticle>,
}

impl ArticleTable {
    pub fn new(articles: Vec<EnrichedArticle>) -> Self {
        Self { articles }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EnrichedArticle> {
        self.articles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedArticle> {
        self.articles.iter()
    }

    pub fn articles(&self) -> &[EnrichedArticle] {
        &self.articles
    }

    /// Full content text of the article shown at `index`.
    pub fn content_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(|a| a.content_text.as_str())
    }

    pub fn listing_line(&self, index: usize) -> Option<String> {
        self.get(index).map(|a| {
            format!(
                "{} -- CONTENT_TYPE: {} -- Sentiment: {}",
                a.record.title.as_deref().unwrap_or_default(),
                a.content_type_label(),
                a.sentiment
            )
        })
    }

    pub fn listing(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.listing_line(i)).collect()
    }

    pub fn sentiment_counts(&self) -> BTreeMap<SentimentLabel, usize> {
        let mut counts = BTreeMap::new();
        for article in &self.articles {
            *counts.entry(article.sentiment).or_insert(0) += 1;
        }
        counts
    }

    /// Articles per source name, most frequent first. Articles without a
    /// source name are not counted.
    pub fn source_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for article in &self.articles {
            if let Some(name) = article.record.source.name.as_deref() {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    pub fn into_inner(self) -> Vec<EnrichedArticle> {
        self.articles
    }
}
