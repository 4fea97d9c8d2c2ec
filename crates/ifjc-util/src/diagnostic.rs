//! First-error-wins diagnostic reporting.
//!
//! Unlike a general-purpose compiler's diagnostic handler, which
//! accumulates and sorts many diagnostics, this one only ever needs to
//! remember the first: the language's error-handling policy is "first
//! error wins, no recovery" (see the error handling design), so the
//! handler degenerates to a single-slot latch that refuses every write
//! after the first.

use crate::error::CompileError;
use crate::span::Span;

/// Severity of a diagnostic. Only `Error` can currently be produced —
/// `Warning`/`Note` are kept because the builder API reads naturally
/// with them and a future diagnostic (e.g. an unreachable-code
/// warning) would slot in without restructuring callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

/// Fluent builder for a [`Diagnostic`], mirroring the shape of a
/// multi-field error-reporting API even though this compiler only ever
/// builds single-message diagnostics.
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        DiagnosticBuilder {
            level: Level::Error,
            message: message.into(),
            span: Span::dummy(),
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
        }
    }

    /// Converts the diagnostic into a [`CompileError`] with the given
    /// code and records it with `handler`, returning the resulting
    /// error for callers that want to propagate it with `?`.
    pub fn emit(self, handler: &mut Handler, code: crate::error::ErrorCode) -> CompileError {
        let err = CompileError::new(code, self.message.clone(), self.span);
        handler.report(err.clone());
        err
    }
}

/// First-error latch: records the first [`CompileError`] reported to
/// it and ignores every subsequent call. In practice the `?`-operator
/// pipeline already stops at the first `Err`, so `Handler` mostly
/// exists to give the driver one place to ask "did anything go wrong"
/// independent of control flow, and to match the teacher's
/// diagnostic-handler shape.
#[derive(Debug, Default)]
pub struct Handler {
    first: Option<CompileError>,
}

impl Handler {
    pub fn new() -> Self {
        Handler { first: None }
    }

    pub fn report(&mut self, err: CompileError) {
        if self.first.is_none() {
            self.first = Some(err);
        }
    }

    pub fn has_errored(&self) -> bool {
        self.first.is_some()
    }

    pub fn into_first_error(self) -> Option<CompileError> {
        self.first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn only_the_first_error_is_kept() {
        let mut handler = Handler::new();
        handler.report(CompileError::syntax("first", Span::new(1, 1)));
        handler.report(CompileError::syntax("second", Span::new(2, 1)));
        let first = handler.into_first_error().unwrap();
        assert_eq!(first.message, "first");
    }

    #[test]
    fn builder_emits_through_handler() {
        let mut handler = Handler::new();
        let err = DiagnosticBuilder::error("undefined variable")
            .span(Span::new(5, 2))
            .emit(&mut handler, ErrorCode::UndefinedSymbol);
        assert!(handler.has_errored());
        assert_eq!(err.code, ErrorCode::UndefinedSymbol);
    }
}
