use nl_core::{Error, PolarityModel, Result};
use std::sync::Arc;

pub mod lexicon;
pub mod vader;

pub use lexicon::LexiconModel;
pub use vader::VaderModel;

pub const MODEL_NAMES: &[&str] = &["vader", "lexicon"];

pub fn create_model(name: &str) -> Result<Arc<dyn PolarityModel>> {
    match name.to_ascii_lowercase().as_str() {
        "vader" => Ok(Arc::new(VaderModel::new())),
        "lexicon" => Ok(Arc::new(LexiconModel::new())),
        other => Err(Error::Inference(format!(
            "Unknown sentiment model: {} (expected one of {})",
            other,
            MODEL_NAMES.join(", ")
        ))),
    }
}
