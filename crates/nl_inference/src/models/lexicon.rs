//! Small averaged-lexicon scorer.
//!
//! Each token found in the lexicon contributes its score; a preceding negator
//! flips the sign and halves it. The polarity is the mean of contributions,
//! or zero when nothing matched.

use lazy_static::lazy_static;
use nl_core::PolarityModel;
use std::collections::HashMap;

const LEXICON: &[(&str, f64)] = &[
    ("positive", 0.227),
    ("negative", -0.3),
    ("good", 0.7),
    ("bad", -0.7),
    ("great", 0.8),
    ("terrible", -1.0),
    ("happy", 0.8),
    ("sad", -0.5),
    ("excellent", 1.0),
    ("awful", -1.0),
    ("wonderful", 1.0),
    ("horrible", -1.0),
    ("best", 1.0),
    ("worst", -1.0),
    ("love", 0.5),
    ("hate", -0.8),
    ("nice", 0.6),
    ("poor", -0.4),
    ("strong", 0.433),
    ("weak", -0.375),
    ("gain", 0.3),
    ("gains", 0.3),
    ("loss", -0.3),
    ("losses", -0.3),
    ("win", 0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("success", 0.6),
    ("crisis", -0.6),
    ("growth", 0.3),
    ("decline", -0.3),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "cannot"];

lazy_static! {
    static ref SCORES: HashMap<&'static str, f64> = LEXICON.iter().copied().collect();
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty())
            .collect();

        let mut total = 0.0;
        let mut hits = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(score) = SCORES.get(token) else {
                continue;
            };
            let negated = i > 0 && is_negator(tokens[i - 1]);
            total += if negated { -0.5 * score } else { *score };
            hits += 1;
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }
}
