//! Shared infrastructure for the IFJ24 compiler: error/diagnostic types,
//! source spans, and identifier interning.
//!
//! Every other crate in the workspace depends on this one and nothing
//! else; it carries no knowledge of tokens, types, or code generation.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{CompileError, CompileResult, ErrorCode};
pub use span::Span;
pub use symbol::{Interner, Symbol};
