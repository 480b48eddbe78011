use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use nl_core::{ArticleTable, Category, Config, QueryParams};
use nl_fetch::ArticleBatchProcessor;
use nl_inference::SentimentClassifier;
use nl_text::TextNormalizer;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "newslens", author, version, about = "Fetch news, clean the text and score its sentiment", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "NEWSLENS_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Sentiment model: vader or lexicon
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Show a progress bar while fetching article content
    #[arg(long, global = true)]
    pub progress: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Top headlines for a country and category
    Headlines {
        /// Two-letter country code (e.g. us, gb, in)
        #[arg(long)]
        country: String,
        #[arg(long, value_enum, default_value_t = Category::General)]
        category: Category,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Articles matching a free-text query
    Search {
        query: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the normalized form of each text
    Normalize {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the polarity and sentiment label of a text
    Classify { text: String },
}

#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Print the full content of the article at this index
    #[arg(long)]
    pub show: Option<usize>,
    /// Print the enriched articles as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// File configuration (or defaults) with command-line overrides applied.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(api_key) = &self.api_key {
            config.news_api.api_key = Some(api_key.clone());
        }
        if let Some(model) = &self.model {
            config.sentiment_model = model.clone();
        }
        if self.progress {
            config.show_progress = true;
        }
        match &self.command {
            Commands::Headlines { output, .. } | Commands::Search { output, .. } => {
                if let Some(page_size) = output.page_size {
                    config.news_api.page_size = page_size;
                }
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

pub async fn handle_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Headlines {
            country,
            category,
            output,
        } => {
            let api_key = require_api_key(config)?;
            let params = QueryParams::top_headlines(&country, category, api_key, config.news_api.page_size);
            info!("🗞️ Top {} headlines for {}", category, country);
            run_and_print(config, &params, &output).await
        }
        Commands::Search { query, output } => {
            let api_key = require_api_key(config)?;
            let params = QueryParams::everything(&query, api_key, config.news_api.page_size);
            info!("🔎 Searching for \"{}\"", query);
            run_and_print(config, &params, &output).await
        }
        Commands::Normalize { texts } => {
            let normalizer = TextNormalizer::from_config(config)?;
            for line in normalizer.normalize(&texts) {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Classify { text } => {
            let classifier = SentimentClassifier::from_config(config)?;
            println!("{:.4}\t{}", classifier.polarity(&text), classifier.classify(&text));
            Ok(())
        }
    }
}

fn require_api_key(config: &Config) -> anyhow::Result<&str> {
    config
        .news_api
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| anyhow!("No NewsAPI key: pass --api-key or set NEWSAPI_KEY"))
}

async fn run_and_print(config: &Config, params: &QueryParams, output: &OutputArgs) -> anyhow::Result<()> {
    let processor = ArticleBatchProcessor::from_config(config)?;
    let table = processor.run_query(params).await?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(table.articles())?);
    } else {
        print!("{}", render_listing(&table));
    }

    if let Some(index) = output.show {
        let content = table
            .content_at(index)
            .ok_or_else(|| anyhow!("No article at index {} ({} fetched)", index, table.len()))?;
        println!("\n{}", content);
    }
    Ok(())
}

/// Numbered listing followed by the sentiment and source tallies.
pub fn render_listing(table: &ArticleTable) -> String {
    let mut out = String::new();
    for (i, line) in table.listing().iter().enumerate() {
        out.push_str(&format!("{:>3}  {}\n", i, line));
    }
    if table.is_empty() {
        out.push_str("No articles.\n");
        return out;
    }

    let sentiments = table
        .sentiment_counts()
        .iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("\nSentiment  {}\n", sentiments));

    let sources = table
        .source_counts()
        .iter()
        .map(|(name, count)| format!("{}: {}", name, count))
        .collect::<Vec<_>>()
        .join(", ");
    if !sources.is_empty() {
        out.push_str(&format!("Sources    {}\n", sources));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::{ArticleRecord, ArticleSource, ContentType, EnrichedArticle, SentimentLabel};
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_headlines_defaults() {
        let cli = parse(&["newslens", "headlines", "--country", "us"]);
        match &cli.command {
            Commands::Headlines {
                country,
                category,
                output,
            } => {
                assert_eq!(country, "us");
                assert_eq!(*category, Category::General);
                assert_eq!(output.page_size, None);
                assert!(!output.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_overrides_apply() {
        let cli = parse(&[
            "newslens",
            "--api-key",
            "abc",
            "--model",
            "lexicon",
            "--progress",
            "search",
            "Tesla",
            "--page-size",
            "25",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.news_api.api_key.as_deref(), Some("abc"));
        assert_eq!(config.sentiment_model, "lexicon");
        assert!(config.show_progress);
        assert_eq!(config.news_api.page_size, 25);
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sentiment_model = \"lexicon\"\n\n[news_api]\npage_size = 5").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&["newslens", "--config", &path, "classify", "good"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.sentiment_model, "lexicon");
        assert_eq!(config.news_api.page_size, 5);

        let cli = parse(&["newslens", "--config", &path, "--model", "vader", "classify", "good"]);
        assert_eq!(cli.load_config().unwrap().sentiment_model, "vader");
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let cli = parse(&["newslens", "headlines", "--country", "us", "--page-size", "0"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_normalize_requires_text() {
        assert!(Cli::try_parse_from(["newslens", "normalize"]).is_err());
    }

    #[test]
    fn test_require_api_key() {
        let mut config = Config::default();
        config.news_api.api_key = None;
        assert!(require_api_key(&config).is_err());
        config.news_api.api_key = Some(String::new());
        assert!(require_api_key(&config).is_err());
        config.news_api.api_key = Some("k".to_string());
        assert_eq!(require_api_key(&config).unwrap(), "k");
    }

    #[test]
    fn test_render_listing() {
        let article = |title: &str, source: &str, sentiment| EnrichedArticle {
            record: ArticleRecord {
                source: ArticleSource {
                    id: None,
                    name: Some(source.to_string()),
                },
                title: Some(title.to_string()),
                url: format!("https://a.test/{}", title),
                ..Default::default()
            },
            content_type: Some(ContentType::Article),
            content_text: String::new(),
            content_text_cleaned: String::new(),
            sentiment,
        };
        let table = ArticleTable::new(vec![
            article("Up", "CNN", SentimentLabel::Positive),
            article("Down", "BBC", SentimentLabel::Negative),
        ]);

        let rendered = render_listing(&table);
        assert!(rendered.starts_with("  0  Up -- CONTENT_TYPE: ARTICLE -- Sentiment: Positive\n"));
        assert!(rendered.contains("  1  Down -- CONTENT_TYPE: ARTICLE -- Sentiment: Negative\n"));
        assert!(rendered.contains("Sentiment  Positive: 1, Negative: 1\n"));
        assert!(rendered.contains("Sources    BBC: 1, CNN: 1\n"));

        assert_eq!(render_listing(&ArticleTable::default()), "No articles.\n");
    }
}
