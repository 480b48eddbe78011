use nl_core::{Config, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::cleaning::{newlines_to_spaces, remove_digits, remove_punctuation, strip_non_ascii};
use crate::contractions::decontracted;
use crate::lemmatizer::Lemmatizer;
use crate::stopwords;

/// One step of the cleanup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lowercase,
    ExpandContractions,
    RemoveDigits,
    NewlinesToSpaces,
    RemovePunctuation,
    StripNonAscii,
    Lemmatize,
    RemoveStopWords,
}

/// Stages in the order they run. Non-ASCII characters are dropped before
/// lemmatization so the tagger only ever sees ASCII tokens.
pub const PIPELINE: [Stage; 8] = [
    Stage::Lowercase,
    Stage::ExpandContractions,
    Stage::RemoveDigits,
    Stage::NewlinesToSpaces,
    Stage::RemovePunctuation,
    Stage::StripNonAscii,
    Stage::Lemmatize,
    Stage::RemoveStopWords,
];

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    /// Normalizer using the built-in English stop-word list.
    pub fn new() -> Self {
        Self::with_stop_words(stopwords::english())
    }

    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            lemmatizer: Lemmatizer::new(),
        }
    }

    pub fn from_stop_word_file(path: &Path) -> Result<Self> {
        Ok(Self::with_stop_words(stopwords::load(path)?))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.stop_words_path {
            Some(path) => Self::from_stop_word_file(path),
            None => Ok(Self::new()),
        }
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Cleans every text independently. Output has the same length and order
    /// as the input.
    pub fn normalize<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|text| self.normalize_one(text.as_ref())).collect()
    }

    pub fn normalize_one(&self, text: &str) -> String {
        PIPELINE
            .iter()
            .fold(text.to_string(), |acc, stage| self.apply(*stage, &acc))
    }

    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Lowercase => text.to_lowercase(),
            Stage::ExpandContractions => decontracted(text),
            Stage::RemoveDigits => remove_digits(text),
            Stage::NewlinesToSpaces => newlines_to_spaces(text),
            Stage::RemovePunctuation => remove_punctuation(text),
            Stage::StripNonAscii => strip_non_ascii(text),
            Stage::Lemmatize => self.lemmatize_text(text),
            Stage::RemoveStopWords => self.remove_stop_words(text),
        }
    }

    /// Lemmatizes each whitespace-separated token with its guessed part of
    /// speech and rejoins them with single spaces.
    pub fn lemmatize_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.lemmatizer.lemmatize_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn remove_stop_words(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sentences() {
        let normalizer = TextNormalizer::new();
        let result = normalizer.normalize(&[
            "This is a test sentence.",
            "Another test sentence with numbers 123.",
        ]);
        assert_eq!(result, vec!["test sentence", "another test sentence number"]);
    }

    #[test]
    fn test_lemmatize_text() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.lemmatize_text("running eating cats"), "run eat cat");
        assert_eq!(normalizer.normalize(&["running eating cats"]), vec!["run eat cat"]);
    }

    #[test]
    fn test_normalize_is_idempotent_per_input() {
        let normalizer = TextNormalizer::new();
        let input = vec![
            "Stocks fell 3% on Monday after the Fed's announcement.".to_string(),
            String::new(),
        ];
        assert_eq!(normalizer.normalize(&input), normalizer.normalize(&input));
    }

    #[test]
    fn test_preserves_length_and_order() {
        let normalizer = TextNormalizer::new();
        let result = normalizer.normalize(&["cats", "", "the", "dogs"]);
        assert_eq!(result, vec!["cat", "", "", "dog"]);
    }

    #[test]
    fn test_reduces_to_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_one(""), "");
        assert_eq!(normalizer.normalize_one("  \n\t "), "");
        assert_eq!(normalizer.normalize_one("123 ... !!!"), "");
    }

    #[test]
    fn test_non_ascii_is_dropped_before_lemmatization() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_one("Café owners’ rally"), "caf owner rally");
    }

    #[test]
    fn test_contractions_and_newlines() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_one("They're not going, aren't they?"), "go");
        assert_eq!(normalizer.normalize_one("markets\nrally"), "market rally");
    }

    #[test]
    fn test_lemmatize_text_keeps_non_ascii_tokens() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.lemmatize_text("a丸ing cats"), "a丸ing cat");
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(PIPELINE[0], Stage::Lowercase);
        let ascii = PIPELINE.iter().position(|s| *s == Stage::StripNonAscii).unwrap();
        let lemma = PIPELINE.iter().position(|s| *s == Stage::Lemmatize).unwrap();
        assert!(ascii < lemma);
        assert_eq!(PIPELINE[7], Stage::RemoveStopWords);
    }

    #[test]
    fn test_custom_stop_words() {
        let normalizer = TextNormalizer::with_stop_words(["market".to_string()].into_iter().collect());
        assert_eq!(normalizer.normalize_one("The markets"), "the");
    }
}
