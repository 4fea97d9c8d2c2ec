//! Identifiers, keywords, and `ifj.<builtin>` references.

use ifjc_util::Span;

use crate::token::{Literal, Token, TokenKind};

use super::core::Lexer;

/// The fixed allow-list of built-in function names reachable through
/// the `ifj.` namespace. Any other `ifj.<name>` is a lexical error,
/// matching the scanner's closed `builtin_functions` table.
const BUILTINS: &[&str] = &[
    "ifj.readstr",
    "ifj.readi32",
    "ifj.readf64",
    "ifj.write",
    "ifj.i2f",
    "ifj.f2i",
    "ifj.length",
    "ifj.string",
    "ifj.concat",
    "ifj.substring",
    "ifj.strcmp",
    "ifj.ord",
    "ifj.chr",
];

fn keyword(lexeme: &str) -> Option<TokenKind> {
    Some(match lexeme {
        "const" => TokenKind::KwConst,
        "fn" => TokenKind::KwFn,
        "if" => TokenKind::KwIf,
        "else" => TokenKind::KwElse,
        "while" => TokenKind::KwWhile,
        "return" => TokenKind::KwReturn,
        "var" => TokenKind::KwVar,
        "void" => TokenKind::KwVoid,
        "pub" => TokenKind::KwPub,
        "null" => TokenKind::KwNull,
        "i32" => TokenKind::KwI32,
        "f64" => TokenKind::KwF64,
        "u8" => TokenKind::KwU8,
        "[]u8" => TokenKind::KwStringType,
        _ => return None,
    })
}

pub(super) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub(super) fn lex(lexer: &mut Lexer<'_>) -> Result<Token, ifjc_util::CompileError> {
    let span = lexer.span();
    let start_byte = lexer.cursor.peek().unwrap();

    if start_byte == b'_' && !lexer.cursor.peek_at(1).map(is_ident_continue).unwrap_or(false) {
        lexer.cursor.bump();
        return Ok(Token::simple(TokenKind::Underscore, span));
    }

    let text = lexer.cursor.eat_while(is_ident_continue);
    let mut name = std::str::from_utf8(text).unwrap().to_string();

    // `ifj.<name>` — the only place a `.` is legal inside an identifier.
    if name == "ifj" && lexer.cursor.peek() == Some(b'.') {
        lexer.cursor.bump();
        let rest = lexer.cursor.eat_while(is_ident_continue);
        name.push('.');
        name.push_str(std::str::from_utf8(rest).unwrap());
        if !BUILTINS.contains(&name.as_str()) {
            return Err(lexer.error(format!("invalid built-in function '{name}'"), span));
        }
        let sym = lexer.interner.intern(&name);
        return Ok(Token::new(TokenKind::Ident, Literal::Str(sym), span));
    }

    if let Some(kind) = keyword(&name) {
        return Ok(Token::simple(kind, span));
    }

    let sym = lexer.interner.intern(&name);
    Ok(Token::new(TokenKind::Ident, Literal::Str(sym), span))
}

/// Lexes the identifier-shaped suffix of a `?`-prefixed nullable type
/// token (`?i32`, `?f64`, `?[]u8`). Called by `operator::lex` once it
/// has consumed the leading `?` and confirmed a letter or `[` follows.
pub(super) fn lex_nullable_type(
    lexer: &mut Lexer<'_>,
    span: Span,
) -> Result<Token, ifjc_util::CompileError> {
    let text = lexer
        .cursor
        .eat_while(|b| b == b'[' || b == b']' || b == b'_' || b.is_ascii_alphanumeric());
    let name = std::str::from_utf8(text).unwrap();
    match keyword(name) {
        Some(TokenKind::KwI32) => Ok(Token::simple(TokenKind::NullableI32, span)),
        Some(TokenKind::KwF64) => Ok(Token::simple(TokenKind::NullableF64, span)),
        Some(TokenKind::KwStringType) => Ok(Token::simple(TokenKind::NullableString, span)),
        _ => Err(lexer.error(format!("invalid nullable type '?{name}'"), span)),
    }
}
