//! The scanner for IFJ24 source text.
//!
//! The scanner is a Mealy-style finite state machine driven one byte
//! at a time over the in-memory source buffer. There is no separate
//! tokenisation pass and re-lex step: the driver lexes the whole input
//! once into a `Vec<Token>` and both compiler passes walk that same
//! vector (see `ifjc-par`'s two-pass driver).
//!
//! Module layout mirrors the shape of a per-category scan routine per
//! module: identifiers/keywords, numbers, strings, and operators each
//! get their own file, dispatched from a single top-level `next_token`
//! in [`lexer::core`].

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};
