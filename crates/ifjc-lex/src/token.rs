//! Token representation.
//!
//! Mirrors the original scanner's `token_type`/`token_attribute`
//! union: a closed set of kinds, with at most one of an integer,
//! float, or interned string payload attached.

use ifjc_util::{Span, Symbol};

/// The payload a token carries, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(Symbol),
    None,
}

/// The closed set of lexical categories the scanner can produce.
///
/// Keyword, punctuation, and operator variants carry no payload;
/// `Ident`, `IntLit`, `FloatLit`, and `StringLit` do (see [`Token::literal`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    KwConst,
    KwFn,
    KwIf,
    KwElse,
    KwWhile,
    KwReturn,
    KwVar,
    KwVoid,
    KwPub,
    KwNull,
    KwI32,
    KwF64,
    KwU8,
    KwStringType, // `[]u8`

    // Nullable-type tokens
    NullableI32,    // ?i32
    NullableF64,    // ?f64
    NullableString, // ?[]u8

    Ident,
    Underscore,
    Eof,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Question,
    Pipe,

    // Operators
    Assign,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    Not,
    And,
    Or,
    Plus,
    Minus,
    Star,
    Slash,

    // Literals
    IntLit,
    FloatLit,
    StringLit,

    Import, // @import
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Literal,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: Literal, span: Span) -> Self {
        Token { kind, literal, span }
    }

    pub fn simple(kind: TokenKind, span: Span) -> Self {
        Token::new(kind, Literal::None, span)
    }
}
