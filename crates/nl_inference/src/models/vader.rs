use nl_core::PolarityModel;
use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER compound score.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderModel").finish()
    }
}

impl PolarityModel for VaderModel {
    fn name(&self) -> &str {
        "vader"
    }

    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vader_polarity() {
        let model = VaderModel::new();
        assert!(model.polarity("What a wonderful and happy day!") > 0.0);
        assert!(model.polarity("A terrible and horrible disaster.") < 0.0);
        assert_eq!(model.polarity("The committee met on Tuesday."), 0.0);
        assert_eq!(model.polarity(""), 0.0);
        assert_eq!(model.polarity("   "), 0.0);
    }

    #[test]
    fn test_vader_is_deterministic() {
        let model = VaderModel::new();
        let text = "Shares rallied after a great quarter, but analysts remain cautious.";
        assert_eq!(model.polarity(text), model.polarity(text));
    }
}
