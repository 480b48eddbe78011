use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Headlines API endpoint a query is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Endpoint {
    TopHeadlines,
    Everything,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::TopHeadlines => "top-headlines",
            Endpoint::Everything => "everything",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    #[default]
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parameters for one upstream call. Insertion order is irrelevant.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryParams {
    endpoint: Endpoint,
    params: HashMap<String, String>,
}

/// Order-independent representation of a [`QueryParams`], used as the
/// request-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    endpoint: Endpoint,
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: HashMap::new(),
        }
    }

    pub fn top_headlines(country: &str, category: Category, api_key: &str, page_size: u32) -> Self {
        Self::new(Endpoint::TopHeadlines)
            .with("country", country)
            .with("apiKey", api_key)
            .with("category", category.as_str())
            .with("pageSize", page_size.to_string())
    }

    pub fn everything(query: &str, api_key: &str, page_size: u32) -> Self {
        Self::new(Endpoint::Everything)
            .with("q", query)
            .with("apiKey", api_key)
            .with("pageSize", page_size.to_string())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }

    /// Parameter pairs sorted by key.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort();
        pairs
    }

    pub fn canonical_key(&self) -> QueryKey {
        QueryKey {
            endpoint: self.endpoint,
            pairs: self.pairs(),
        }
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: Vec<(String, String)> = self
            .pairs()
            .into_iter()
            .map(|(k, v)| {
                if k == "apiKey" {
                    (k, "<redacted>".to_string())
                } else {
                    (k, v)
                }
            })
            .collect();
        f.debug_struct("QueryParams")
            .field("endpoint", &self.endpoint)
            .field("params", &redacted)
            .finish()
    }
}
