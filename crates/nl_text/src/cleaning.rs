use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT: Regex = Regex::new(r"\d").expect("digit pattern is valid");
}

/// Replaces every ASCII punctuation character with a single space, keeping
/// token boundaries intact.
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect()
}

/// Deletes every decimal digit, Unicode digits included.
pub fn remove_digits(text: &str) -> String {
    DIGIT.replace_all(text, "").into_owned()
}

pub fn newlines_to_spaces(text: &str) -> String {
    text.replace('\n', " ")
}

pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii()).collect()
}
