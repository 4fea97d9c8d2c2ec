//! IFJcode24 emission: the stack-machine target assembly text.
//!
//! `CodeGen` owns the growing output buffer, the monotonic label
//! counter, and the two control-flow label stacks (`if`/`while`).
//! There is no intermediate representation between parsing and
//! emission — every `emit_*` call here is invoked directly from the
//! parser as it reduces expressions and statements.

pub mod builtins;
pub mod codegen;
pub mod error;
pub mod float;

pub use codegen::CodeGen;
pub use error::CodeGenError;
