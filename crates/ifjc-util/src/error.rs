//! The closed error taxonomy and the typed `Result` alias threaded
//! through every compiler phase.

use std::fmt;

use crate::span::Span;

/// One of the process exit codes the driver can report.
///
/// The numbering is part of the external contract (callers script
/// around these values), so the discriminants are pinned explicitly
/// rather than left to declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Lexical = 1,
    Syntax = 2,
    UndefinedSymbol = 3,
    BadCallSignature = 4,
    Redefinition = 5,
    ReturnMismatch = 6,
    TypeIncompatibility = 7,
    TypeInferenceFailure = 8,
    UnusedVariable = 9,
    OtherSemantic = 10,
    Internal = 99,
}

impl ErrorCode {
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

/// A compilation failure: a code from the closed taxonomy, a message,
/// and the source location it was raised at.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Error {code}: {message} at line {line}, column {column}", code = self.code.exit_code(), line = self.span.line, column = self.span.column)]
pub struct CompileError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl CompileError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        CompileError {
            code,
            message: message.into(),
            span,
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::Lexical, message, span)
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::Syntax, message, span)
    }

    pub fn undefined(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::UndefinedSymbol, message, span)
    }

    pub fn bad_call(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::BadCallSignature, message, span)
    }

    pub fn redefinition(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::Redefinition, message, span)
    }

    pub fn return_mismatch(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::ReturnMismatch, message, span)
    }

    pub fn type_incompatible(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::TypeIncompatibility, message, span)
    }

    pub fn type_inference(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::TypeInferenceFailure, message, span)
    }

    pub fn unused_variable(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::UnusedVariable, message, span)
    }

    pub fn other_semantic(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::OtherSemantic, message, span)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message, Span::dummy())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exit_code())
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_the_driver_contract() {
        let err = CompileError::type_incompatible("mismatched types", Span::new(3, 7));
        assert_eq!(
            err.to_string(),
            "Error 7: mismatched types at line 3, column 7"
        );
    }

    #[test]
    fn internal_error_has_code_99() {
        let err = CompileError::internal("allocation failure");
        assert_eq!(err.code.exit_code(), 99);
    }
}
