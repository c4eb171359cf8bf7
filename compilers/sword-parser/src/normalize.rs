use std::borrow::Cow;

use lazy_static::lazy_static;
use nom::{
    bytes::complete::{take_till1, take_while},
    IResult,
};
use regex::{NoExpand, Regex};

use crate::token::Token;

/// A whole-word rewrite applied to recognizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Alternatives that are rewritten. Multi-word entries match any run of
    /// whitespace between their words.
    pub from: &'static [&'static str],
    pub to: &'static str,
}

impl Substitution {
    const fn new(from: &'static [&'static str], to: &'static str) -> Self {
        Self { from, to }
    }

    fn regex(&self) -> Regex {
        let alternatives: Vec<String> = self
            .from
            .iter()
            .map(|phrase| {
                phrase
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect();
        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        Regex::new(&pattern).expect("escaped literals always compile")
    }

    #[cfg(test)]
    fn apply(&self, text: &str) -> String {
        self.regex().replace_all(text, NoExpand(self.to)).into_owned()
    }
}

/// Known speech-recognizer confusions for book names.
pub const MISRECOGNITIONS: [Substitution; 7] = [
    Substitution::new(&["axe"], "acts"),
    Substitution::new(&["zachariah"], "zechariah"),
    Substitution::new(&["dude"], "jude"),
    Substitution::new(&["revelations"], "revelation"),
    Substitution::new(&["philippines"], "philippians"),
    Substitution::new(&["collections", "collisions"], "colossians"),
    Substitution::new(&["malik i won"], "malachi one"),
];

/// Words the recognizer hears instead of numbers.
pub const NUMBER_HOMOPHONES: [Substitution; 3] = [
    Substitution::new(&["for"], "four"),
    Substitution::new(&["to"], "two"),
    Substitution::new(&["fourty"], "forty"),
];

lazy_static! {
    static ref SUBSTITUTIONS: Vec<(Regex, &'static str)> = MISRECOGNITIONS
        .iter()
        .chain(NUMBER_HOMOPHONES.iter())
        .map(|sub| (sub.regex(), sub.to))
        .collect();
}

/// `:` splits "3:16", dashes split "3-16"; sentence punctuation is noise.
fn is_separator(c: char) -> bool {
    matches!(c, ':' | '-' | '\u{2013}' | '\u{2014}' | ',' | '.' | ';' | '!' | '?')
}

/// Cleans one finalized utterance: lowercase, separators to spaces, then the
/// misrecognition and number-homophone tables in order. Idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();

    for (regex, to) in SUBSTITUTIONS.iter() {
        if let Cow::Owned(rewritten) = regex.replace_all(&text, NoExpand(to)) {
            text = rewritten;
        }
    }

    text
}

/// Splits on any Unicode whitespace.
pub fn split_words(input: &str) -> Vec<&str> {
    let mut rest = input;
    let mut words = Vec::new();

    loop {
        // 1. Skip whitespace
        let skipped: IResult<&str, &str> = take_while(char::is_whitespace)(rest);
        let Ok((next, _)) = skipped else { break };
        rest = next;

        if rest.is_empty() {
            break;
        }

        // 2. Take the word
        let word: IResult<&str, &str> = take_till1(char::is_whitespace)(rest);
        match word {
            Ok((next, text)) => {
                words.push(text);
                rest = next;
            }
            Err(_) => break,
        }
    }

    words
}

/// A normalized utterance that owns its text; tokens borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        Self { text: normalize(raw) }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> Vec<Token<'_>> {
        split_words(&self.text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token::new(index, text))
            .collect()
    }
}

/// Normalized, owned tokens for callers that keep them past the utterance.
pub fn tokenize(raw: &str) -> Vec<String> {
    let utterance = Utterance::new(raw);
    utterance.tokens().iter().map(|t| t.text.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_separators() {
        assert_eq!(tokenize("John 3:16"), ["john", "3", "16"]);
        assert_eq!(tokenize("Romans 8-28"), ["romans", "8", "28"]);
        assert_eq!(tokenize("Psalm 23, verse 1."), ["psalm", "23", "verse", "1"]);
        assert_eq!(tokenize("twenty-three"), ["twenty", "three"]);
    }

    #[test]
    fn test_misrecognition_table_entries() {
        assert_eq!(MISRECOGNITIONS[0].apply("axe 2"), "acts 2");
        assert_eq!(MISRECOGNITIONS[1].apply("zachariah 4"), "zechariah 4");
        assert_eq!(MISRECOGNITIONS[2].apply("dude 5"), "jude 5");
        assert_eq!(MISRECOGNITIONS[3].apply("revelations 21"), "revelation 21");
        assert_eq!(MISRECOGNITIONS[4].apply("philippines 4 13"), "philippians 4 13");
        assert_eq!(MISRECOGNITIONS[5].apply("collections 3"), "colossians 3");
        assert_eq!(MISRECOGNITIONS[5].apply("collisions 3"), "colossians 3");
        assert_eq!(MISRECOGNITIONS[6].apply("malik  i won 6"), "malachi one 6");
    }

    #[test]
    fn test_number_homophone_entries() {
        assert_eq!(NUMBER_HOMOPHONES[0].apply("john for"), "john four");
        assert_eq!(NUMBER_HOMOPHONES[1].apply("3 to 5"), "3 two 5");
        assert_eq!(NUMBER_HOMOPHONES[2].apply("fourty one"), "forty one");
    }

    #[test]
    fn test_substitutions_match_whole_words_only() {
        assert_eq!(normalize("tobit forty before"), "tobit forty before");
        assert_eq!(normalize("taxes"), "taxes");
    }

    #[test]
    fn test_misrecognition_feeds_tokens() {
        assert_eq!(tokenize("axe 2 verse 4"), ["acts", "2", "verse", "4"]);
        assert_eq!(tokenize("Malik I won 2"), ["malachi", "one", "2"]);
    }

    #[test]
    fn test_empty_and_unicode_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert_eq!(tokenize("ÉSAÏE\u{00A0}40"), ["ésaïe", "40"]);
    }

    #[test]
    fn test_token_indices() {
        let utterance = Utterance::new("first John 3:16");
        let tokens = utterance.tokens();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
        assert_eq!(tokens[1].text, "john");
    }

    #[test]
    fn test_split_words_on_unicode_whitespace() {
        assert_eq!(split_words("  a bc\u{2003}d "), ["a", "bc", "d"]);
        assert!(split_words(" \u{2003} ").is_empty());
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(raw in "[a-zA-Z0-9 :,.\\-]{0,40}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn test_normalize_never_panics(raw in "\\PC{0,40}") {
            let _ = tokenize(&raw);
        }
    }
}
