//! Apostrophe expansion.
//!
//! Rules are literal and applied in order over the whole string. Specific
//! forms come first so that e.g. `won't` is not caught by the generic `n't`
//! rule. Some replacements are linguistically loose (`let's` becomes
//! `let is`); they are kept as-is so cleaned text stays stable.

pub const SPECIFIC_RULES: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "can not"),
    ("there's", "there is"),
    ("it's", "it is"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("how's", "how is"),
    ("let's", "let is"),
    ("so's", "so is"),
    ("what's", "what is"),
    ("when's", "when is"),
    ("where's", "where is"),
    ("why's", "why is"),
];

pub const GENERIC_RULES: &[(&str, &str)] = &[
    ("n't", " not"),
    ("'re", " are"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

pub fn decontracted(phrase: &str) -> String {
    SPECIFIC_RULES
        .iter()
        .chain(GENERIC_RULES.iter())
        .fold(phrase.to_string(), |text, (pattern, replacement)| {
            text.replace(pattern, replacement)
        })
}
