use sword_protocol::FillerWord;

/// Words that separate numbers in a spoken reference without carrying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillerTable {
    chapter: &'static [&'static str],
    verse: &'static [&'static str],
}

impl FillerTable {
    pub const fn new(chapter: &'static [&'static str], verse: &'static [&'static str]) -> Self {
        Self { chapter, verse }
    }

    /// "chapter" for chapters; "verse" and "and" for verses.
    pub const fn standard() -> Self {
        Self::new(&["chapter"], &["verse", "and"])
    }

    pub fn classify(&self, token: &str) -> Option<FillerWord> {
        let is = |words: &[&str]| words.iter().any(|w| w.eq_ignore_ascii_case(token));

        if is(self.chapter) {
            Some(FillerWord::Chapter)
        } else if is(self.verse) {
            Some(FillerWord::Verse)
        } else {
            None
        }
    }
}

impl Default for FillerTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fillers() {
        let fillers = FillerTable::standard();
        assert_eq!(fillers.classify("chapter"), Some(FillerWord::Chapter));
        assert_eq!(fillers.classify("Verse"), Some(FillerWord::Verse));
        assert_eq!(fillers.classify("and"), Some(FillerWord::Verse));
        assert_eq!(fillers.classify("3"), None);
        assert_eq!(fillers.classify("chapters"), None);
    }
}
