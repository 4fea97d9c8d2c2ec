//! Internal invariant violations the generator can hit. These never
//! originate from anything in the source program — a real compile
//! error is always raised by the parser/semantic layer before code
//! generation is asked to do something nonsensical. Reaching one of
//! these means the generator itself has a bug, so every variant maps
//! to the internal-compiler-error exit code.

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    #[error("no active if-block to close")]
    NoActiveIf,
    #[error("no active while-loop to close")]
    NoActiveWhile,
}
