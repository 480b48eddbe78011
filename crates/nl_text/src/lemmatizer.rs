//! Dictionary-free lemmatizer.
//!
//! Irregular forms are looked up in exception tables; regular forms go
//! through suffix detachment. Verb stems are repaired after removing
//! `-ing`/`-ed` (undoubling, restoring a silent `e`) using Porter's measure.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

use crate::tagger::{tag_word, PosTag};

const VERB_FORMS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("doing", "do"), ("goes", "go"), ("went", "go"),
    ("gone", "go"), ("said", "say"), ("says", "say"), ("made", "make"), ("took", "take"),
    ("taken", "take"), ("came", "come"), ("got", "get"), ("gotten", "get"), ("gave", "give"),
    ("given", "give"), ("knew", "know"), ("known", "know"), ("saw", "see"), ("seen", "see"),
    ("thought", "think"), ("told", "tell"), ("found", "find"), ("became", "become"),
    ("began", "begin"), ("begun", "begin"), ("left", "leave"), ("felt", "feel"),
    ("brought", "bring"), ("bought", "buy"), ("kept", "keep"), ("held", "hold"),
    ("stood", "stand"), ("ran", "run"), ("wrote", "write"), ("written", "write"),
    ("spoke", "speak"), ("spoken", "speak"), ("met", "meet"), ("paid", "pay"), ("sent", "send"),
    ("built", "build"), ("lost", "lose"), ("won", "win"), ("sat", "sit"), ("fell", "fall"),
    ("fallen", "fall"), ("grew", "grow"), ("grown", "grow"), ("drew", "draw"),
    ("drawn", "draw"), ("broke", "break"), ("broken", "break"), ("chose", "choose"),
    ("chosen", "choose"), ("ate", "eat"), ("eaten", "eat"), ("drove", "drive"),
    ("driven", "drive"), ("rose", "rise"), ("risen", "rise"), ("shook", "shake"),
    ("shaken", "shake"), ("flew", "fly"), ("flown", "fly"), ("taught", "teach"),
    ("caught", "catch"), ("fought", "fight"), ("sought", "seek"), ("sold", "sell"),
    ("heard", "hear"), ("meant", "mean"), ("understood", "understand"), ("spent", "spend"),
    ("dying", "die"), ("died", "die"), ("lying", "lie"), ("lied", "lie"), ("tying", "tie"),
    ("tied", "tie"), ("led", "lead"), ("fled", "flee"), ("used", "use"), ("using", "use"),
];

const NOUN_FORMS: &[(&str, &str)] = &[
    ("children", "child"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
    ("mice", "mouse"), ("data", "datum"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("buses", "bus"), ("gases", "gas"), ("viruses", "virus"), ("bonuses", "bonus"),
    ("statuses", "status"), ("campuses", "campus"), ("crises", "crisis"),
    ("analyses", "analysis"), ("theses", "thesis"), ("diagnoses", "diagnosis"),
    ("wolves", "wolf"), ("knives", "knife"), ("lives", "life"), ("wives", "wife"),
    ("leaves", "leaf"), ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"),
    ("selves", "self"), ("calves", "calf"), ("loaves", "loaf"), ("canoes", "canoe"),
    ("movies", "movie"), ("cookies", "cookie"), ("zombies", "zombie"), ("calories", "calorie"),
    ("rookies", "rookie"), ("selfies", "selfie"), ("brownies", "brownie"), ("goalies", "goalie"),
    ("headaches", "headache"), ("niches", "niche"), ("caches", "cache"),
    ("avalanches", "avalanche"), ("moustaches", "moustache"), ("mustaches", "mustache"),
];

const ADJECTIVE_FORMS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("bigger", "big"), ("biggest", "big"), ("larger", "large"), ("largest", "large"),
    ("smaller", "small"), ("smallest", "small"), ("higher", "high"), ("highest", "high"),
    ("lower", "low"), ("lowest", "low"), ("older", "old"), ("oldest", "old"),
    ("younger", "young"), ("youngest", "young"), ("stronger", "strong"),
    ("strongest", "strong"), ("greater", "great"), ("greatest", "great"),
];

/// Nouns that look plural but are not.
const UNINFLECTED_NOUNS: &[&str] = &[
    "news", "series", "species", "politics", "economics", "physics", "mathematics", "ethics",
    "athletics", "means", "headquarters", "whereabouts", "lens", "chaos", "corps", "diabetes",
    "measles", "billiards", "sports", "united", "always", "perhaps", "whereas", "afterwards",
];

/// -men words whose singular is not -man.
const MEN_WORDS: &[&str] = &[
    "specimen", "omen", "abdomen", "regimen", "stamen", "semen", "amen", "acumen", "hymen",
    "yemen", "lumen", "ramen", "examen", "gravamen", "foramen", "cyclamen", "albumen",
    "bitumen", "carmen",
];

/// Verb stems ending in -ng that take a final e.
const NG_E_STEMS: &[&str] = &["chang", "exchang", "arrang", "challeng", "plung", "aveng", "reveng", "rang"];

/// Verb stems ending in vowel + s that do not take a final e.
const S_NO_E_STEMS: &[&str] = &["focus", "bias", "gas", "bus", "canvas", "alias", "atlas"];

lazy_static! {
    pub(crate) static ref VERB_EXCEPTIONS: HashMap<&'static str, &'static str> =
        VERB_FORMS.iter().copied().collect();
    pub(crate) static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> =
        NOUN_FORMS.iter().copied().collect();
    pub(crate) static ref ADJECTIVE_EXCEPTIONS: HashMap<&'static str, &'static str> =
        ADJECTIVE_FORMS.iter().copied().collect();
    static ref UNINFLECTED: HashSet<&'static str> = UNINFLECTED_NOUNS.iter().copied().collect();
    static ref MEN_SET: HashSet<&'static str> = MEN_WORDS.iter().copied().collect();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Tags `word` in isolation and lemmatizes it with that tag.
    pub fn lemmatize_word(&self, word: &str) -> String {
        self.lemmatize(word, tag_word(word))
    }

    /// Words with non-ASCII characters are returned unchanged.
    pub fn lemmatize(&self, word: &str, pos: PosTag) -> String {
        if !word.is_ascii() {
            return word.to_string();
        }
        match pos {
            PosTag::Verb => lemmatize_verb(word),
            PosTag::Adjective => ADJECTIVE_EXCEPTIONS
                .get(word)
                .map(|lemma| lemma.to_string())
                .unwrap_or_else(|| word.to_string()),
            PosTag::Adverb => word.to_string(),
            PosTag::Noun | PosTag::Other => lemmatize_noun(word),
        }
    }
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(lemma) = NOUN_EXCEPTIONS.get(word) {
        return lemma.to_string();
    }
    if word.ends_with("men") && !MEN_SET.contains(word) {
        return format!("{}an", &word[..word.len() - 2]);
    }
    if UNINFLECTED.contains(word) || word.len() <= 3 {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ["sses", "xes", "ches", "shes"].iter().any(|suffix| word.ends_with(suffix)) {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 5 && word.ends_with("oes") {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn lemmatize_verb(word: &str) -> String {
    if let Some(lemma) = VERB_EXCEPTIONS.get(word) {
        return lemma.to_string();
    }
    let len = word.len();
    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }
    if ["sses", "xes", "ches", "shes", "zzes"].iter().any(|suffix| word.ends_with(suffix)) {
        return word[..len - 2].to_string();
    }
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..len - 1].to_string();
    }
    if len > 4 && word.ends_with("ied") {
        return format!("{}y", &word[..len - 3]);
    }
    if len > 4 && word.ends_with("eed") {
        return word[..len - 1].to_string();
    }
    if len >= 5 && word.ends_with("ing") && has_vowel(&word[..len - 3]) {
        return restore_verb_stem(&word[..len - 3]);
    }
    if len >= 4 && word.ends_with("ed") && has_vowel(&word[..len - 2]) {
        return restore_verb_stem(&word[..len - 2]);
    }
    word.to_string()
}

/// Repairs a stem left after removing `-ing` or `-ed`.
fn restore_verb_stem(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    if n < 2 {
        return stem.to_string();
    }

    let last = b[n - 1];
    if last == b[n - 2] && is_consonant(b, n - 1) {
        return match last {
            b'l' if measure(&b[..n - 1]) >= 2 => stem[..n - 1].to_string(),
            b'l' | b's' | b'z' => stem.to_string(),
            _ => stem[..n - 1].to_string(),
        };
    }

    let with_e = || format!("{}e", stem);

    if stem.ends_with("at") {
        let before = if n >= 3 { b[n - 3] } else { b'a' };
        return if stem.ends_with("creat") || !matches!(before, b'e' | b'o') {
            with_e()
        } else {
            stem.to_string()
        };
    }
    if stem.ends_with("bl") || matches!(last, b'v' | b'c' | b'z') {
        return with_e();
    }
    if last == b's' && !is_consonant(b, n - 2) {
        return if S_NO_E_STEMS.contains(&stem) {
            stem.to_string()
        } else {
            with_e()
        };
    }
    if last == b'g' {
        return if b[n - 2] != b'n' || NG_E_STEMS.contains(&stem) {
            with_e()
        } else {
            stem.to_string()
        };
    }
    if measure(b) == 1 && ends_cvc(b) {
        return with_e();
    }
    stem.to_string()
}

fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let b = stem.as_bytes();
    (0..b.len()).any(|i| !is_consonant(b, i))
}

/// Porter's m: the number of vowel-consonant sequences.
fn measure(b: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let vowel = !is_consonant(b, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// consonant-vowel-consonant ending, the last consonant not w, x or y.
fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && is_consonant(b, n - 3)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new().lemmatize_word(word)
    }

    #[test]
    fn test_lemmatize_text_words() {
        assert_eq!(lemma("running"), "run");
        assert_eq!(lemma("eating"), "eat");
        assert_eq!(lemma("cats"), "cat");
    }

    #[test]
    fn test_nouns() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("numbers", PosTag::Noun), "number");
        assert_eq!(l.lemmatize("companies", PosTag::Noun), "company");
        assert_eq!(l.lemmatize("boxes", PosTag::Noun), "box");
        assert_eq!(l.lemmatize("churches", PosTag::Noun), "church");
        assert_eq!(l.lemmatize("classes", PosTag::Noun), "class");
        assert_eq!(l.lemmatize("houses", PosTag::Noun), "house");
        assert_eq!(l.lemmatize("heroes", PosTag::Noun), "hero");
        assert_eq!(l.lemmatize("women", PosTag::Noun), "woman");
        assert_eq!(l.lemmatize("men", PosTag::Noun), "man");
        assert_eq!(l.lemmatize("children", PosTag::Noun), "child");
        assert_eq!(l.lemmatize("movies", PosTag::Noun), "movie");
        assert_eq!(l.lemmatize("ties", PosTag::Noun), "tie");
        assert_eq!(l.lemmatize("news", PosTag::Noun), "news");
        assert_eq!(l.lemmatize("analysis", PosTag::Noun), "analysis");
        assert_eq!(l.lemmatize("status", PosTag::Noun), "status");
        assert_eq!(l.lemmatize("specimen", PosTag::Noun), "specimen");
        assert_eq!(l.lemmatize("sentence", PosTag::Noun), "sentence");
    }

    #[test]
    fn test_function_words_are_untouched() {
        for word in ["this", "his", "its", "as", "us", "with", "another"] {
            assert_eq!(lemma(word), word);
        }
    }

    #[test]
    fn test_verbs() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("is", PosTag::Verb), "be");
        assert_eq!(l.lemmatize("went", PosTag::Verb), "go");
        assert_eq!(l.lemmatize("making", PosTag::Verb), "make");
        assert_eq!(l.lemmatize("hoping", PosTag::Verb), "hope");
        assert_eq!(l.lemmatize("hopping", PosTag::Verb), "hop");
        assert_eq!(l.lemmatize("creating", PosTag::Verb), "create");
        assert_eq!(l.lemmatize("testing", PosTag::Verb), "test");
        assert_eq!(l.lemmatize("opened", PosTag::Verb), "open");
        assert_eq!(l.lemmatize("tried", PosTag::Verb), "try");
        assert_eq!(l.lemmatize("agreed", PosTag::Verb), "agree");
        assert_eq!(l.lemmatize("falling", PosTag::Verb), "fall");
        assert_eq!(l.lemmatize("cancelled", PosTag::Verb), "cancel");
        assert_eq!(l.lemmatize("missing", PosTag::Verb), "miss");
        assert_eq!(l.lemmatize("caused", PosTag::Verb), "cause");
        assert_eq!(l.lemmatize("focused", PosTag::Verb), "focus");
        assert_eq!(l.lemmatize("moving", PosTag::Verb), "move");
        assert_eq!(l.lemmatize("announced", PosTag::Verb), "announce");
        assert_eq!(l.lemmatize("managed", PosTag::Verb), "manage");
        assert_eq!(l.lemmatize("changing", PosTag::Verb), "change");
        assert_eq!(l.lemmatize("belonged", PosTag::Verb), "belong");
        assert_eq!(l.lemmatize("realized", PosTag::Verb), "realize");
        assert_eq!(l.lemmatize("playing", PosTag::Verb), "play");
        assert_eq!(l.lemmatize("bring", PosTag::Verb), "bring");
    }

    #[test]
    fn test_adjectives_and_adverbs() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("better", PosTag::Adjective), "good");
        assert_eq!(l.lemmatize("famous", PosTag::Adjective), "famous");
        assert_eq!(l.lemmatize("quickly", PosTag::Adverb), "quickly");
    }

    #[test]
    fn test_non_ascii_words_are_untouched() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize_word("a丸ing"), "a丸ing");
        assert_eq!(l.lemmatize("caféing", PosTag::Verb), "caféing");
        assert_eq!(l.lemmatize("niñomen", PosTag::Noun), "niñomen");
    }

    #[test]
    fn test_porter_helpers() {
        assert_eq!(measure(b"tr"), 0);
        assert_eq!(measure(b"tree"), 0);
        assert_eq!(measure(b"trouble"), 1);
        assert_eq!(measure(b"oats"), 1);
        assert_eq!(measure(b"troubles"), 2);
        assert!(ends_cvc(b"hop"));
        assert!(!ends_cvc(b"snow"));
        assert!(!ends_cvc(b"eat"));
    }
}
