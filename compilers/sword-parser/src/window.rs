use sword_numerals::compound;
use sword_protocol::{BookEntry, FillerWord, NumericToken};

use crate::error::{Ambiguity, ResolveError};
use crate::filler::FillerTable;
use crate::token::Token;

/// Numeric tokens examined after a title before the window closes.
/// Each filler word extends the bound by one.
pub const NUMERIC_BUDGET: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowItem {
    Filler(FillerWord),
    Number(NumericToken),
}

/// The fillers and numbers that follow a title, in spoken order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    items: Vec<WindowItem>,
    chapter_fillers: usize,
    verse_fillers: usize,
}

/// A chapter and optional verse, plus how many tokens produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub chapter: u32,
    pub verse: Option<u32>,
    /// Tokens examined after the title; the outer scan resumes past them.
    pub examined: usize,
}

impl Window {
    /// Classifies tokens from `start` until a token that is neither filler
    /// nor number, or until the budget runs out.
    pub fn scan(tokens: &[Token<'_>], start: usize, fillers: &FillerTable) -> Self {
        let mut window = Self::default();

        for token in tokens.iter().skip(start) {
            if window.items.len() >= NUMERIC_BUDGET + window.chapter_fillers + window.verse_fillers {
                break;
            }

            let item = match fillers.classify(token.text) {
                Some(FillerWord::Chapter) => {
                    window.chapter_fillers += 1;
                    WindowItem::Filler(FillerWord::Chapter)
                }
                Some(FillerWord::Verse) => {
                    window.verse_fillers += 1;
                    WindowItem::Filler(FillerWord::Verse)
                }
                None => match sword_numerals::resolve(token.text) {
                    Some(number) => WindowItem::Number(number),
                    None => break,
                },
            };
            window.items.push(item);
        }

        window
    }

    pub fn examined(&self) -> usize {
        self.items.len()
    }

    pub fn chapter_fillers(&self) -> usize {
        self.chapter_fillers
    }

    pub fn verse_fillers(&self) -> usize {
        self.verse_fillers
    }

    /// Numbers with their position among the window's items.
    pub fn numbers(&self) -> impl Iterator<Item = (usize, NumericToken)> + '_ {
        self.items.iter().enumerate().filter_map(|(pos, item)| match item {
            WindowItem::Number(number) => Some((pos, *number)),
            WindowItem::Filler(_) => None,
        })
    }

    pub fn reference_items(&self) -> usize {
        self.numbers().count()
    }

    /// Turns the window into a chapter and verse for `book`.
    ///
    /// Rules by how many numbers were heard:
    /// - 0: nothing to resolve.
    /// - 1: a verse of chapter 1 for single-chapter books; a whole chapter
    ///   when "chapter" was said and "verse" was not; otherwise ambiguous.
    /// - 2: chapter then verse, unless the first is a tens word with no
    ///   verse filler ("twenty three" may be 23).
    /// - 3: one adjacent tens+ones pair is a compound; the chapter side wins.
    /// - 4: compound chapter then compound verse.
    pub fn resolve(&self, book: &BookEntry) -> Result<Resolution, ResolveError> {
        let numbers: Vec<(usize, NumericToken)> = self.numbers().collect();

        let (chapter, verse) = match numbers.as_slice() {
            [] => return Err(Ambiguity::NoNumbers.into()),
            [(_, only)] => {
                if book.is_single_chapter() {
                    (1, Some(only.value))
                } else if self.chapter_fillers > 0 && self.verse_fillers == 0 {
                    (only.value, None)
                } else {
                    return Err(Ambiguity::LoneNumber.into());
                }
            }
            [(_, first), (_, second)] => {
                if first.is_tens_word && self.verse_fillers == 0 {
                    return Err(Ambiguity::TensOrCompound.into());
                }
                (first.value, Some(second.value))
            }
            [a, b, c] => resolve_three(*a, *b, *c)?,
            [(_, a), (_, b), (_, c), (_, d)] => {
                let chapter = compound(*a, *b).ok_or(Ambiguity::NoCompound)?;
                let verse = compound(*c, *d).ok_or(Ambiguity::NoCompound)?;
                (chapter, Some(verse))
            }
            more => return Err(Ambiguity::TooManyNumbers(more.len()).into()),
        };

        if chapter == 0 || verse == Some(0) {
            return Err(Ambiguity::ZeroValue.into());
        }

        Ok(Resolution { chapter, verse, examined: self.examined() })
    }
}

fn resolve_three(
    (pos_a, a): (usize, NumericToken),
    (pos_b, b): (usize, NumericToken),
    (pos_c, c): (usize, NumericToken),
) -> Result<(u32, Option<u32>), ResolveError> {
    // Adjacent means no filler between the two numbers
    if pos_b == pos_a + 1 {
        if let Some(chapter) = compound(a, b) {
            return Ok((chapter, Some(c.value)));
        }
    }
    if pos_c == pos_b + 1 {
        if let Some(verse) = compound(b, c) {
            return Ok((a.value, Some(verse)));
        }
    }
    if c.is_tens_word {
        return Err(ResolveError::MalformedWindow);
    }
    Err(Ambiguity::NoCompound.into())
}

/// Scans the window after a title and resolves it in one step.
pub fn disambiguate(
    tokens: &[Token<'_>],
    start: usize,
    book: &BookEntry,
    fillers: &FillerTable,
) -> Result<Resolution, ResolveError> {
    Window::scan(tokens, start, fillers).resolve(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sword_protocol::BookCatalog;

    fn book(name: &str) -> &'static BookEntry {
        BookCatalog::standard().lookup(name).unwrap()
    }

    fn run(name: &str, words: &[&str]) -> Result<Resolution, ResolveError> {
        let tokens = Token::sequence(words);
        disambiguate(&tokens, 0, book(name), &FillerTable::standard())
    }

    fn ok(chapter: u32, verse: Option<u32>, examined: usize) -> Result<Resolution, ResolveError> {
        Ok(Resolution { chapter, verse, examined })
    }

    #[test]
    fn test_window_stops_at_other_words() {
        let tokens = Token::sequence(&["3", "verse", "16", "romans", "8"]);
        let window = Window::scan(&tokens, 0, &FillerTable::standard());

        assert_eq!(window.examined(), 3);
        assert_eq!(window.reference_items(), 2);
        assert_eq!(window.verse_fillers(), 1);
        assert_eq!(window.chapter_fillers(), 0);
    }

    #[test]
    fn test_window_budget_grows_with_fillers() {
        let tokens = Token::sequence(&["1", "2", "3", "4", "5", "6"]);
        assert_eq!(Window::scan(&tokens, 0, &FillerTable::standard()).examined(), 4);

        let tokens = Token::sequence(&["chapter", "1", "verse", "2", "and", "3", "4", "5"]);
        let window = Window::scan(&tokens, 0, &FillerTable::standard());
        assert_eq!(window.examined(), 7);
        assert_eq!(window.reference_items(), 4);
    }

    #[test]
    fn test_no_numbers() {
        assert_eq!(run("john", &["is", "3"]), Err(Ambiguity::NoNumbers.into()));
        assert_eq!(run("john", &[]), Err(Ambiguity::NoNumbers.into()));
    }

    #[test]
    fn test_one_number() {
        assert_eq!(run("jude", &["5"]), ok(1, Some(5), 1));
        assert_eq!(run("2 john", &["verse", "twelve"]), ok(1, Some(12), 2));
        assert_eq!(run("genesis", &["5"]), Err(Ambiguity::LoneNumber.into()));
        assert_eq!(run("genesis", &["chapter", "5"]), ok(5, None, 2));
        assert_eq!(run("genesis", &["chapter", "verse", "5"]), Err(Ambiguity::LoneNumber.into()));
    }

    #[test]
    fn test_two_numbers() {
        assert_eq!(run("john", &["3", "16"]), ok(3, Some(16), 2));
        assert_eq!(run("john", &["chapter", "three", "verse", "sixteen"]), ok(3, Some(16), 4));
        assert_eq!(run("psalms", &["twenty", "three"]), Err(Ambiguity::TensOrCompound.into()));
        assert_eq!(run("psalms", &["chapter", "twenty", "three"]), Err(Ambiguity::TensOrCompound.into()));
        assert_eq!(run("psalms", &["twenty", "verse", "three"]), ok(20, Some(3), 3));
        assert_eq!(run("psalms", &["twenty", "and", "three"]), ok(20, Some(3), 3));
    }

    #[test]
    fn test_three_numbers() {
        assert_eq!(run("psalms", &["thirty", "one", "verse", "5"]), ok(31, Some(5), 4));
        assert_eq!(run("john", &["3", "verse", "twenty", "one"]), ok(3, Some(21), 4));
        assert_eq!(run("psalms", &["twenty", "one", "two"]), ok(21, Some(2), 3));
        assert_eq!(run("psalms", &["twenty", "verse", "one", "two"]), Err(Ambiguity::NoCompound.into()));
        assert_eq!(run("john", &["3", "5", "twenty"]), Err(ResolveError::MalformedWindow));
    }

    #[test]
    fn test_four_numbers() {
        assert_eq!(
            run("psalms", &["twenty", "three", "verse", "forty", "one"]),
            ok(23, Some(41), 5)
        );
        assert_eq!(run("john", &["3", "16", "17", "18"]), Err(Ambiguity::NoCompound.into()));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(run("john", &["0", "5"]), Err(Ambiguity::ZeroValue.into()));
        assert_eq!(run("jude", &["zero"]), Err(Ambiguity::ZeroValue.into()));
    }
}
