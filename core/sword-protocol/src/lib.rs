#![no_std] // Shared with the wasm front end

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod books;
pub mod ids;

// Re-export core types for convenience
pub use books::{BookCatalog, BookEntry, BookFlags, BOOKS, MAX_TITLE_WORDS};
pub use ids::BookId;

pub mod model;
pub use model::*;
