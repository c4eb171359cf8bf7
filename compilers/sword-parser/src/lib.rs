pub mod anchor;
pub mod consumed;
pub mod emit;
pub mod error;
pub mod filler;
pub mod normalize;
pub mod token;
pub mod window;

use sword_protocol::{BookCatalog, Reference};
use tracing::{debug, info};

use crate::anchor::match_anchor;
use crate::consumed::ConsumedSet;
use crate::emit::{package, ReferenceSink};
use crate::filler::FillerTable;
use crate::normalize::Utterance;
use crate::token::Token;
use crate::window::disambiguate;

pub use crate::error::{Ambiguity, ResolveError};

/// The reference resolution engine: catalog and filler tables in,
/// references out. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    catalog: BookCatalog,
    fillers: FillerTable,
}

impl Extractor {
    pub const fn new(catalog: BookCatalog, fillers: FillerTable) -> Self {
        Self { catalog, fillers }
    }

    /// Primary entry point: one finalized utterance -> references, in spoken order.
    pub fn extract(&self, raw: &str) -> Vec<Reference> {
        let utterance = Utterance::new(raw);
        debug!(raw, normalized = utterance.text(), "normalized utterance");

        let tokens = utterance.tokens();
        let mut references = Vec::new();
        if tokens.is_empty() {
            debug!("no usable tokens in utterance");
            return references;
        }

        self.scan(&tokens, &mut references);
        references
    }

    /// Walks the tokens left to right, handing each resolved reference to `sink`.
    ///
    /// A failed anchor moves the cursor one token, so numbers after it stay
    /// available; a resolved one moves it past everything it consumed.
    pub fn scan<S: ReferenceSink + ?Sized>(&self, tokens: &[Token<'_>], sink: &mut S) {
        let mut consumed = ConsumedSet::new(tokens.len());
        let mut cursor = 0;

        while cursor < tokens.len() {
            if consumed.contains(cursor) {
                cursor += 1;
                continue;
            }

            let Some(anchor) = match_anchor(tokens, cursor, &self.catalog) else {
                cursor += 1;
                continue;
            };
            // "john" in "first john" must never anchor again
            consumed.mark(anchor.title_span());

            match disambiguate(tokens, anchor.next(), anchor.book, &self.fillers) {
                Ok(resolution) => {
                    let reference = package(&anchor, &resolution);
                    consumed.mark(reference.consumed_span);
                    cursor = reference.consumed_span.end;

                    info!(%reference, start = anchor.start, "resolved reference");
                    sink.emit(reference);
                }
                Err(err) => {
                    debug!(book = anchor.book.name, at = anchor.start, %err, "skipping anchor");
                    cursor = anchor.start + 1;
                }
            }
        }
    }
}

/// Extracts references with the built-in catalog and filler words.
pub fn extract(raw: &str) -> Vec<Reference> {
    Extractor::default().extract(raw)
}
