use std::sync::mpsc::{SendError, Sender};

use sword_protocol::{Reference, Span};
use tracing::warn;

use crate::anchor::Anchor;
use crate::window::Resolution;

/// Downstream receiver of resolved references.
///
/// Emission is fire-and-forget: the scanner never revisits a reference
/// because of what the sink did with it.
pub trait ReferenceSink {
    fn emit(&mut self, reference: Reference);
}

impl ReferenceSink for Vec<Reference> {
    fn emit(&mut self, reference: Reference) {
        self.push(reference);
    }
}

/// For hosts that drain references from a queue on another thread.
impl ReferenceSink for Sender<Reference> {
    fn emit(&mut self, reference: Reference) {
        if let Err(SendError(dropped)) = self.send(reference) {
            warn!(reference = %dropped, "reference receiver is gone, dropping");
        }
    }
}

/// Builds the reference for a resolved anchor. The span runs from the first
/// title token through the last token the window examined.
pub fn package(anchor: &Anchor, resolution: &Resolution) -> Reference {
    Reference {
        book: anchor.book,
        chapter: resolution.chapter,
        verse: resolution.verse,
        consumed_span: Span::new(anchor.start, anchor.next() + resolution.examined),
    }
}
