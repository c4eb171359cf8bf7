/// One normalized word of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Position in the utterance's token sequence.
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// Wraps words that were already split and normalized elsewhere.
    pub fn sequence(words: &[&'a str]) -> Vec<Token<'a>> {
        words
            .iter()
            .enumerate()
            .map(|(index, text)| Token::new(index, text))
            .collect()
    }
}
