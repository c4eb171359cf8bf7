use thiserror::Error;

/// Why a window after an anchor did not yield a unique reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ambiguity {
    #[error("no number follows the title")]
    NoNumbers,
    #[error("a lone number after a multi-chapter book")]
    LoneNumber,
    #[error("a tens word is either the chapter or the start of a compound")]
    TensOrCompound,
    #[error("no tens and ones pair forms a compound number")]
    NoCompound,
    #[error("chapter or verse resolved to zero")]
    ZeroValue,
    #[error("{0} numbers in one window")]
    TooManyNumbers(usize),
}

/// Recovered locally: the scanner logs it, skips the anchor and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("ambiguous reference: {0}")]
    Ambiguous(#[from] Ambiguity),
    #[error("window ran out of tokens while assembling a compound number")]
    MalformedWindow,
}
