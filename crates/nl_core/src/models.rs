use std::fmt;

/// Lexicon-style scorer producing a continuous polarity for a piece of text.
pub trait PolarityModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Polarity in `[-1.0, 1.0]`. Must be `0.0` for empty text.
    fn polarity(&self, text: &str) -> f64;
}
