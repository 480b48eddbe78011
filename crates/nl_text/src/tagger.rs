//! Single-word part-of-speech guesser.
//!
//! Closed-class lists first, then irregular verb forms, then suffix rules.
//! Anything unrecognised is a noun.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::lemmatizer::{ADJECTIVE_EXCEPTIONS, VERB_EXCEPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adjective,
    Noun,
    Verb,
    Adverb,
    /// Determiners, pronouns, prepositions, conjunctions, modals.
    Other,
}

const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "another", "each", "every", "all", "any",
    "both", "some", "such", "no", "nor", "either", "neither", "i", "me", "my", "mine", "myself",
    "we", "us", "our", "ours", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "they", "them", "their", "theirs", "what", "which", "who", "whom", "whose",
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "within", "without", "upon", "among", "across", "toward", "towards", "via",
    "and", "but", "if", "or", "because", "as", "until", "while", "than", "whether", "although",
    "though", "unless", "since", "will", "would", "can", "could", "shall", "should", "may",
    "might", "must",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "just", "now", "then", "here", "there", "too", "so", "again", "never",
    "always", "often", "soon", "already", "still", "even", "ever", "only", "once", "yet",
    "almost", "perhaps", "quite", "rather", "well", "however", "instead", "later", "ago",
    "sometimes", "thus", "therefore", "indeed",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "great", "high", "low", "large", "little",
    "long", "young", "few", "many", "much", "own", "same", "other", "different", "important",
    "public", "able", "late", "hard", "major", "free", "real", "strong", "whole", "sure",
    "clear", "recent", "social", "national", "positive", "negative", "neutral",
];

/// Words ending in -ly that are not adverbs.
const LY_NOUNS: &[&str] = &[
    "family", "italy", "july", "supply", "reply", "apply", "rely", "ally", "belly", "jelly",
    "rally", "assembly", "anomaly", "monopoly", "bully", "fly", "lily", "melancholy",
];

/// Words ending in -ing that are nouns or function words.
const ING_WORDS: &[&str] = &[
    "thing", "king", "ring", "spring", "string", "wing", "sing", "bring", "sting", "swing",
    "morning", "evening", "nothing", "something", "anything", "everything", "ceiling",
    "building", "meeting", "wedding", "clothing", "pudding", "sibling", "darling", "during",
    "earring", "offspring", "viking", "beijing", "ping", "ding",
];

/// Words ending in -ed that are not past forms.
const ED_WORDS: &[&str] = &[
    "need", "seed", "speed", "feed", "bed", "red", "shed", "hundred", "indeed", "bred",
    "sacred", "naked", "wicked", "kindred", "creed", "greed", "breed", "steed", "weed",
    "deed", "bleed", "exceed", "proceed", "succeed", "embed", "wed", "fled", "led", "sled",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"];

lazy_static! {
    static ref FUNCTION_SET: HashSet<&'static str> = FUNCTION_WORDS.iter().copied().collect();
    static ref ADVERB_SET: HashSet<&'static str> = ADVERBS.iter().copied().collect();
    static ref ADJECTIVE_SET: HashSet<&'static str> = ADJECTIVES.iter().copied().collect();
    static ref LY_NOUN_SET: HashSet<&'static str> = LY_NOUNS.iter().copied().collect();
    static ref ING_SET: HashSet<&'static str> = ING_WORDS.iter().copied().collect();
    static ref ED_SET: HashSet<&'static str> = ED_WORDS.iter().copied().collect();
}

/// Most likely tag for a lowercase word seen in isolation.
pub fn tag_word(word: &str) -> PosTag {
    if FUNCTION_SET.contains(word) {
        return PosTag::Other;
    }
    if ADVERB_SET.contains(word) {
        return PosTag::Adverb;
    }
    if ADJECTIVE_SET.contains(word) || ADJECTIVE_EXCEPTIONS.contains_key(word) {
        return PosTag::Adjective;
    }
    if VERB_EXCEPTIONS.contains_key(word) {
        return PosTag::Verb;
    }

    let len = word.len();
    if len > 4 && word.ends_with("ly") && !LY_NOUN_SET.contains(word) {
        return PosTag::Adverb;
    }
    if len >= 5 && word.ends_with("ing") && !ING_SET.contains(word) {
        return PosTag::Verb;
    }
    if len >= 5 && word.ends_with("ed") && !ED_SET.contains(word) {
        return PosTag::Verb;
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return PosTag::Adjective;
    }

    PosTag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_word() {
        assert_eq!(tag_word("running"), PosTag::Verb);
        assert_eq!(tag_word("eating"), PosTag::Verb);
        assert_eq!(tag_word("cats"), PosTag::Noun);
        assert_eq!(tag_word("sentence"), PosTag::Noun);
        assert_eq!(tag_word("is"), PosTag::Verb);
        assert_eq!(tag_word("was"), PosTag::Verb);
        assert_eq!(tag_word("this"), PosTag::Other);
        assert_eq!(tag_word("quickly"), PosTag::Adverb);
        assert_eq!(tag_word("family"), PosTag::Noun);
        assert_eq!(tag_word("famous"), PosTag::Adjective);
        assert_eq!(tag_word("better"), PosTag::Adjective);
        assert_eq!(tag_word("morning"), PosTag::Noun);
        assert_eq!(tag_word("announced"), PosTag::Verb);
        assert_eq!(tag_word("hundred"), PosTag::Noun);
    }
}
