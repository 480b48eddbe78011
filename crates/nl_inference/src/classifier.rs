use nl_core::{Config, PolarityModel, Result, SentimentLabel};
use std::sync::Arc;
use tracing::debug;

use crate::models::create_model;

/// Maps text to a three-way label by the sign of a model's polarity.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn PolarityModel>,
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(create_model(&config.sentiment_model)?))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn polarity(&self, text: &str) -> f64 {
        self.model.polarity(text)
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        let score = self.polarity(text);
        debug!("{} polarity {:.4}", self.model.name(), score);
        SentimentLabel::from_polarity(score)
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(crate::models::VaderModel::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LexiconModel;

    #[derive(Debug)]
    struct FixedModel(f64);

    impl PolarityModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_sign_thresholds() {
        let positive = SentimentClassifier::new(Arc::new(FixedModel(0.0001)));
        let negative = SentimentClassifier::new(Arc::new(FixedModel(-0.0001)));
        let neutral = SentimentClassifier::new(Arc::new(FixedModel(0.0)));
        assert_eq!(positive.classify("x"), SentimentLabel::Positive);
        assert_eq!(negative.classify("x"), SentimentLabel::Negative);
        assert_eq!(neutral.classify("x"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_lexicon_sentences() {
        let classifier = SentimentClassifier::new(Arc::new(LexiconModel::new()));
        assert_eq!(classifier.classify("This is a positive sentence."), SentimentLabel::Positive);
        assert_eq!(classifier.classify("This is a negative sentence."), SentimentLabel::Negative);
        assert_eq!(classifier.classify("This is a neutral sentence."), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(SentimentClassifier::default().classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(SentimentClassifier::from_config(&config).unwrap().model_name(), "vader");

        config.sentiment_model = "lexicon".to_string();
        assert_eq!(SentimentClassifier::from_config(&config).unwrap().model_name(), "lexicon");

        config.sentiment_model = "unknown".to_string();
        assert!(SentimentClassifier::from_config(&config).is_err());
    }
}
