use nl_core::Result;
use std::collections::HashSet;
use std::path::Path;

const ENGLISH: &str = include_str!("../resources/stopwords.txt");

pub fn english() -> HashSet<String> {
    parse(ENGLISH)
}

/// Reads a stop-word list with one word per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn load(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let words = parse(&content);
    tracing::debug!("Loaded {} stop words from {}", words.len(), path.display());
    Ok(words)
}

fn parse(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_lowercase())
        .collect()
}
