use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::books::BookEntry;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Half-open range `[start, end)` of token indices within one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A token that resolved to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken {
    pub value: u32,
    /// twenty, thirty … ninety: may combine with a following ones-word.
    pub is_tens_word: bool,
}

impl NumericToken {
    pub const fn new(value: u32, is_tens_word: bool) -> Self {
        Self { value, is_tens_word }
    }

    /// Could be the ones digit of a spoken compound ("three" in "twenty three").
    pub fn is_ones(&self) -> bool {
        !self.is_tens_word && (1..=9).contains(&self.value)
    }
}

/// Spoken words that separate numbers without carrying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FillerWord {
    /// "chapter"
    Chapter,
    /// "verse", "and"
    Verse,
}

/// A resolved `(book, chapter, optional verse)` extracted from one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub book: &'static BookEntry,
    pub chapter: u32,
    pub verse: Option<u32>,
    /// Every token that produced this reference: title, fillers and numbers.
    pub consumed_span: Span,
}

impl Reference {
    pub fn lookup_key(&self, translation: &str) -> LookupKey {
        LookupKey {
            book: self.book.name,
            chapter: self.chapter,
            verse: self.verse,
            translation: String::from(translation),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verse {
            Some(verse) => write!(f, "{} {}:{}", self.book.name, self.chapter, verse),
            None => write!(f, "{} {}", self.book.name, self.chapter),
        }
    }
}

/// What the verse text service needs to find a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LookupKey {
    pub book: &'static str,
    pub chapter: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub verse: Option<u32>,
    pub translation: String,
}

impl LookupKey {
    /// Passage path segment: `John+3:16`, or `Genesis+5` for a whole chapter.
    pub fn passage(&self) -> String {
        match self.verse {
            Some(verse) => format!("{}+{}:{}", self.book, self.chapter, verse),
            None => format!("{}+{}", self.book, self.chapter),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verse {
            Some(verse) => write!(f, "{} {}:{}", self.book, self.chapter, verse),
            None => write!(f, "{} {}", self.book, self.chapter),
        }
    }
}
