//! Source locations, tracked at line/column granularity only.
//!
//! The compiler is single-file (stdin in, stdout out), so there is no
//! `FileId` or multi-file source map to carry — just the position the
//! scanner was at when it produced a token or raised an error.

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(line: u32, column: u32) -> Self {
        Span { line, column }
    }

    /// The position before scanning has consumed anything.
    pub fn start() -> Self {
        Span { line: 1, column: 1 }
    }

    /// Used for errors with no meaningful source position (internal
    /// compiler errors raised outside the scan/parse loop).
    pub fn dummy() -> Self {
        Span { line: 0, column: 0 }
    }
}
