use bitflags::bitflags;

use crate::ids::BookId;

bitflags! {
    /// Traits of a book title that change how a reference to it is parsed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BookFlags: u8 {
        /// Exactly one chapter: a lone spoken number is a verse.
        const SINGLE_CHAPTER = 1;
        /// Title starts with a numeral ("1 John"), spoken as "first john".
        const ORDINAL_NUMBERED = 2;
    }
}

/// One row of the book catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct BookEntry {
    pub id: BookId,
    /// Canonical name, also used as the lookup key for verse text.
    pub name: &'static str,
    /// Lowercase alternative titles.
    pub aliases: &'static [&'static str],
    pub flags: BookFlags,
}

impl BookEntry {
    pub fn is_single_chapter(&self) -> bool {
        self.flags.contains(BookFlags::SINGLE_CHAPTER)
    }

    pub fn is_ordinal_numbered(&self) -> bool {
        self.flags.contains(BookFlags::ORDINAL_NUMBERED)
    }

    /// Number of words in the canonical title (1..=3).
    pub fn title_word_count(&self) -> usize {
        self.name.split_whitespace().count()
    }

    /// Canonical name first, then aliases.
    pub fn titles(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

const fn book(id: u8, name: &'static str, flags: BookFlags) -> BookEntry {
    BookEntry { id: BookId(id), name, aliases: &[], flags }
}

const fn aliased(id: u8, name: &'static str, aliases: &'static [&'static str]) -> BookEntry {
    BookEntry { id: BookId(id), name, aliases, flags: BookFlags::empty() }
}

const NONE: BookFlags = BookFlags::empty();
const ONE: BookFlags = BookFlags::SINGLE_CHAPTER;
const ORD: BookFlags = BookFlags::ORDINAL_NUMBERED;
const ORD_ONE: BookFlags = BookFlags::ORDINAL_NUMBERED.union(BookFlags::SINGLE_CHAPTER);

/// The 66 books of the Protestant canon, in canonical order.
pub static BOOKS: [BookEntry; 66] = [
    book(1, "Genesis", NONE),
    book(2, "Exodus", NONE),
    book(3, "Leviticus", NONE),
    book(4, "Numbers", NONE),
    book(5, "Deuteronomy", NONE),
    book(6, "Joshua", NONE),
    book(7, "Judges", NONE),
    book(8, "Ruth", NONE),
    book(9, "1 Samuel", ORD),
    book(10, "2 Samuel", ORD),
    book(11, "1 Kings", ORD),
    book(12, "2 Kings", ORD),
    book(13, "1 Chronicles", ORD),
    book(14, "2 Chronicles", ORD),
    book(15, "Ezra", NONE),
    book(16, "Nehemiah", NONE),
    book(17, "Esther", NONE),
    book(18, "Job", NONE),
    aliased(19, "Psalms", &["psalm"]),
    book(20, "Proverbs", NONE),
    book(21, "Ecclesiastes", NONE),
    aliased(22, "Song of Solomon", &["song of songs"]),
    book(23, "Isaiah", NONE),
    book(24, "Jeremiah", NONE),
    book(25, "Lamentations", NONE),
    book(26, "Ezekiel", NONE),
    book(27, "Daniel", NONE),
    book(28, "Hosea", NONE),
    book(29, "Joel", NONE),
    book(30, "Amos", NONE),
    book(31, "Obadiah", ONE),
    book(32, "Jonah", NONE),
    book(33, "Micah", NONE),
    book(34, "Nahum", NONE),
    book(35, "Habakkuk", NONE),
    book(36, "Zephaniah", NONE),
    book(37, "Haggai", NONE),
    book(38, "Zechariah", NONE),
    book(39, "Malachi", NONE),
    book(40, "Matthew", NONE),
    book(41, "Mark", NONE),
    book(42, "Luke", NONE),
    book(43, "John", NONE),
    book(44, "Acts", NONE),
    book(45, "Romans", NONE),
    book(46, "1 Corinthians", ORD),
    book(47, "2 Corinthians", ORD),
    book(48, "Galatians", NONE),
    book(49, "Ephesians", NONE),
    book(50, "Philippians", NONE),
    book(51, "Colossians", NONE),
    book(52, "1 Thessalonians", ORD),
    book(53, "2 Thessalonians", ORD),
    book(54, "1 Timothy", ORD),
    book(55, "2 Timothy", ORD),
    book(56, "Titus", NONE),
    book(57, "Philemon", ONE),
    book(58, "Hebrews", NONE),
    book(59, "James", NONE),
    book(60, "1 Peter", ORD),
    book(61, "2 Peter", ORD),
    book(62, "1 John", ORD),
    book(63, "2 John", ORD_ONE),
    book(64, "3 John", ORD_ONE),
    book(65, "Jude", ONE),
    book(66, "Revelation", NONE),
];

/// Longest title in words ("song of solomon").
pub const MAX_TITLE_WORDS: usize = 3;

/// Read-only view over a book table. Copy it freely; it is a slice.
#[derive(Debug, Clone, Copy)]
pub struct BookCatalog {
    entries: &'static [BookEntry],
}

impl BookCatalog {
    pub const fn new(entries: &'static [BookEntry]) -> Self {
        Self { entries }
    }

    pub const fn standard() -> Self {
        Self::new(&BOOKS)
    }

    pub fn entries(&self) -> &'static [BookEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_id(&self, id: BookId) -> Option<&'static BookEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Case-insensitive match against canonical names and aliases.
    /// Runs of whitespace inside `name` count as a single space.
    pub fn lookup(&self, name: &str) -> Option<&'static BookEntry> {
        self.entries
            .iter()
            .find(|entry| entry.titles().any(|title| same_title(title, name)))
    }

    /// Longest title whose words are a case-insensitive prefix of `words`.
    /// Returns the entry and how many of `words` the title used.
    pub fn match_title(&self, words: &[&str]) -> Option<(&'static BookEntry, usize)> {
        let mut best: Option<(&'static BookEntry, usize)> = None;

        for entry in self.entries {
            for title in entry.titles() {
                let len = title.split_whitespace().count();
                if len > words.len() {
                    continue;
                }
                let matches = title
                    .split_whitespace()
                    .zip(words)
                    .all(|(expected, word)| expected.eq_ignore_ascii_case(word));

                if matches && best.map_or(true, |(_, used)| len > used) {
                    best = Some((entry, len));
                }
            }
        }

        best
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn same_title(title: &str, candidate: &str) -> bool {
    let mut expected = title.split_whitespace();
    let mut actual = candidate.split_whitespace();
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(b) => continue,
            _ => return false,
        }
    }
}
