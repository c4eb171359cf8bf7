use sword_protocol::Span;

/// Token indices already claimed by an anchor or a reference.
///
/// The token list is never shrunk; the scanner asks this set instead, so
/// indices stay stable for the whole utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedSet {
    used: Vec<bool>,
}

impl ConsumedSet {
    pub fn new(len: usize) -> Self {
        Self { used: vec![false; len] }
    }

    /// Out-of-range indices are ignored.
    pub fn mark(&mut self, span: Span) {
        let span = Span::new(span.start, span.end.min(self.used.len()));
        if !span.is_empty() {
            self.used[span.start..span.end].fill(true);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_contains() {
        let mut set = ConsumedSet::new(5);
        set.mark(Span::new(1, 3));

        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(2));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_out_of_range_spans() {
        let mut set = ConsumedSet::new(2);
        set.mark(Span::new(1, 10));
        set.mark(Span::new(7, 9));
        set.mark(Span::new(2, 1));

        assert!(set.contains(1));
        assert!(!set.contains(7));
        assert!(!set.contains(100));
    }
}
