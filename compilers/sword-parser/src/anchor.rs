use sword_protocol::{BookCatalog, BookEntry, Span, MAX_TITLE_WORDS};
use tracing::trace;

use crate::token::Token;

/// Catalog spelling of an ordinal prefix.
const NUMERALS: [&str; 3] = ["1", "2", "3"];

/// A book title found at a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub book: &'static BookEntry,
    /// Index of the first title token.
    pub start: usize,
    /// Tokens the title occupies (1..=3).
    pub title_len: usize,
}

impl Anchor {
    /// First token after the title.
    pub fn next(&self) -> usize {
        self.start + self.title_len
    }

    pub fn title_span(&self) -> Span {
        Span::new(self.start, self.next())
    }
}

/// Decides whether a book reference starts at `cursor`.
///
/// Multi-word titles must match every word ("song" alone is nothing).
/// Ordinal prefixes ("first", "2nd") are folded into the following word and
/// must name an ordinal-numbered book; a bare digit never starts a title.
/// On `None` the caller moves on by exactly one token.
pub fn match_anchor(tokens: &[Token<'_>], cursor: usize, catalog: &BookCatalog) -> Option<Anchor> {
    let first = tokens.get(cursor)?;
    let end = (cursor + MAX_TITLE_WORDS).min(tokens.len());

    let mut words = [""; MAX_TITLE_WORDS];
    for (slot, token) in words.iter_mut().zip(&tokens[cursor..end]) {
        *slot = token.text;
    }
    let words = &mut words[..end - cursor];

    if let Some(n) = sword_numerals::ordinal(first.text) {
        if words.len() < 2 {
            return None;
        }
        words[0] = NUMERALS[usize::from(n) - 1];

        let (book, used) = catalog.match_title(words)?;
        if !book.is_ordinal_numbered() || used != 2 {
            trace!(prefix = first.text, name = book.name, "ordinal prefix names an unnumbered book");
            return None;
        }
        return Some(Anchor { book, start: cursor, title_len: used });
    }

    let (book, used) = catalog.match_title(words)?;
    if book.is_ordinal_numbered() {
        trace!(word = first.text, name = book.name, "numbered book without an ordinal word");
        return None;
    }
    Some(Anchor { book, start: cursor, title_len: used })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor_at(words: &[&str], cursor: usize) -> Option<(&'static str, usize)> {
        let tokens = Token::sequence(words);
        match_anchor(&tokens, cursor, &BookCatalog::standard()).map(|a| (a.book.name, a.title_len))
    }

    #[test]
    fn test_single_word_titles() {
        assert_eq!(anchor_at(&["john", "3", "16"], 0), Some(("John", 1)));
        assert_eq!(anchor_at(&["read", "Genesis"], 1), Some(("Genesis", 1)));
        assert_eq!(anchor_at(&["psalm", "23"], 0), Some(("Psalms", 1)));
        assert_eq!(anchor_at(&["read", "genesis"], 0), None);
    }

    #[test]
    fn test_song_of_solomon_needs_every_word() {
        assert_eq!(anchor_at(&["song", "of", "solomon", "2"], 0), Some(("Song of Solomon", 3)));
        assert_eq!(anchor_at(&["song", "of", "songs"], 0), Some(("Song of Solomon", 3)));
        assert_eq!(anchor_at(&["song", "2", "12"], 0), None);
        assert_eq!(anchor_at(&["song", "of"], 0), None);
    }

    #[test]
    fn test_ordinal_prefixes() {
        assert_eq!(anchor_at(&["first", "john", "3"], 0), Some(("1 John", 2)));
        assert_eq!(anchor_at(&["2nd", "kings"], 0), Some(("2 Kings", 2)));
        assert_eq!(anchor_at(&["3rd", "john", "4"], 0), Some(("3 John", 2)));
        assert_eq!(anchor_at(&["third", "john"], 0), Some(("3 John", 2)));
    }

    #[test]
    fn test_ordinal_prefix_must_name_a_numbered_book() {
        assert_eq!(anchor_at(&["first", "genesis"], 0), None);
        assert_eq!(anchor_at(&["third", "kings"], 0), None);
        assert_eq!(anchor_at(&["first"], 0), None);
        assert_eq!(anchor_at(&["2", "16"], 0), None);
    }

    #[test]
    fn test_bare_digit_is_not_a_prefix() {
        assert_eq!(anchor_at(&["2", "john", "3"], 0), None);
        assert_eq!(anchor_at(&["2", "john", "3"], 1), Some(("John", 1)));
        assert_eq!(anchor_at(&["1", "kings"], 0), None);
    }

    #[test]
    fn test_next_and_span() {
        let tokens = Token::sequence(&["say", "second", "timothy", "3", "16"]);
        let anchor = match_anchor(&tokens, 1, &BookCatalog::standard()).unwrap();
        assert_eq!(anchor.next(), 3);
        assert_eq!(anchor.title_span(), Span::new(1, 3));
    }

    #[test]
    fn test_cursor_past_end() {
        assert_eq!(anchor_at(&["john"], 1), None);
        assert_eq!(anchor_at(&[], 0), None);
    }
}
