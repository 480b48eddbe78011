use nl_core::{PolarityModel, Result, SentimentLabel};
use std::sync::Arc;

pub mod classifier;
pub mod models;

pub use classifier::SentimentClassifier;
pub use models::create_model;

pub mod prelude {
    pub use super::classifier::SentimentClassifier;
    pub use super::models::{create_model, LexiconModel, VaderModel};
    pub use nl_core::{Error, PolarityModel, Result, SentimentLabel};
}

/// Classifies a single text with the named model.
pub fn classify_with(model_name: &str, text: &str) -> Result<SentimentLabel> {
    let model: Arc<dyn PolarityModel> = create_model(model_name)?;
    Ok(SentimentClassifier::new(model).classify(text))
}
