//! Text cleanup for article bodies and transcripts.

pub mod cleaning;
pub mod contractions;
pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod tagger;

pub use cleaning::{newlines_to_spaces, remove_digits, remove_punctuation, strip_non_ascii};
pub use contractions::decontracted;
pub use lemmatizer::Lemmatizer;
pub use normalizer::{Stage, TextNormalizer, PIPELINE};
pub use tagger::{tag_word, PosTag};
