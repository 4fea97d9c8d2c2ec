//! String literals, single-line and multi-line, plus canonicalisation
//! for direct assembly emission.
//!
//! Grounded on the original scanner's `process_str`: every byte ≤
//! `0x20` and `#` are re-encoded `\DDD` (three decimal digits), `\n
//! \t \r` become `\010 \009 \013`, and `\xHH` is re-evaluated and
//! re-encoded the same way, so the generator can splat the resulting
//! text straight into a `string@` operand.

use ifjc_util::CompileError;

use crate::token::{Literal, Token, TokenKind};

use super::core::Lexer;

fn push_escaped_byte(out: &mut String, byte: u8) {
    out.push_str(&format!("\\{byte:03}"));
}

fn push_canonical(out: &mut String, b: u8) {
    if b <= 0x20 || b == b'#' {
        push_escaped_byte(out, b);
    } else {
        out.push(b as char);
    }
}

/// Lexes `"…"`, consuming the surrounding quotes and resolving escape
/// sequences into the canonical `\DDD` form as it goes.
pub(super) fn lex_single_line(lexer: &mut Lexer<'_>) -> Result<Token, CompileError> {
    let span = lexer.span();
    lexer.cursor.bump(); // opening quote

    let mut out = String::new();
    loop {
        let Some(b) = lexer.cursor.peek() else {
            return Err(lexer.error("unterminated string literal", span));
        };
        match b {
            b'"' => {
                lexer.cursor.bump();
                break;
            }
            b'\n' | b'\r' => {
                return Err(lexer.error("newline in single-line string literal", span));
            }
            b'\\' => {
                lexer.cursor.bump();
                push_escape(lexer, &mut out, span, false)?;
            }
            _ => {
                push_canonical(&mut out, b);
                lexer.cursor.bump();
            }
        }
    }

    let sym = lexer.interner.intern(&out);
    Ok(Token::new(TokenKind::StringLit, Literal::Str(sym), span))
}

/// Lexes a multi-line string: one or more lines, each starting with
/// `\\`, joined by a single `\n`. The original scanner treats
/// consecutive `\\`-prefixed lines as one literal; leading whitespace
/// after a `\\` up to the next non-blank is skipped.
pub(super) fn lex_multi_line(lexer: &mut Lexer<'_>) -> Result<Token, CompileError> {
    let span = lexer.span();
    let mut out = String::new();
    let mut first_line = true;

    loop {
        if lexer.cursor.peek() != Some(b'\\') || lexer.cursor.peek_at(1) != Some(b'\\') {
            break;
        }
        lexer.cursor.bump();
        lexer.cursor.bump();

        if !first_line {
            push_escaped_byte(&mut out, b'\n');
        }
        first_line = false;

        while let Some(b) = lexer.cursor.peek() {
            if b == b'\n' {
                break;
            }
            if b == b'\\' {
                lexer.cursor.bump();
                push_escape(lexer, &mut out, span, true)?;
            } else {
                push_canonical(&mut out, b);
                lexer.cursor.bump();
            }
        }

        if lexer.cursor.peek() == Some(b'\n') {
            lexer.cursor.bump();
        }
        // Skip leading whitespace on the next physical line before
        // deciding whether it continues the literal.
        lexer.cursor.eat_while(|b| b == b' ' || b == b'\t');
    }

    let sym = lexer.interner.intern(&out);
    Ok(Token::new(TokenKind::StringLit, Literal::Str(sym), span))
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn push_escape(
    lexer: &mut Lexer<'_>,
    out: &mut String,
    span: ifjc_util::Span,
    is_multiline: bool,
) -> Result<(), CompileError> {
    let Some(next) = lexer.cursor.peek() else {
        return Err(lexer.error("invalid escape sequence", span));
    };
    match next {
        b'n' => {
            push_escaped_byte(out, b'\n');
            lexer.cursor.bump();
        }
        b't' => {
            push_escaped_byte(out, b'\t');
            lexer.cursor.bump();
        }
        b'r' => {
            push_escaped_byte(out, b'\r');
            lexer.cursor.bump();
        }
        b'\\' => {
            if !is_multiline {
                push_escaped_byte(out, b'\\');
            }
            lexer.cursor.bump();
        }
        b'"' => {
            out.push('"');
            lexer.cursor.bump();
        }
        b'x' => {
            lexer.cursor.bump();
            let hi = lexer
                .cursor
                .peek()
                .and_then(hex_value)
                .ok_or_else(|| lexer.error("invalid \\x escape: expected two hex digits", span))?;
            lexer.cursor.bump();
            let lo = lexer
                .cursor
                .peek()
                .and_then(hex_value)
                .ok_or_else(|| lexer.error("invalid \\x escape: expected two hex digits", span))?;
            lexer.cursor.bump();
            let value = hi * 16 + lo;
            push_escaped_byte(out, value);
        }
        _ => {
            return Err(lexer.error("invalid escape sequence", span));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifjc_util::Interner;

    fn lex_one(src: &str) -> String {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(src, &mut interner);
        let tok = lex_single_line(&mut lexer).unwrap();
        match tok.literal {
            Literal::Str(sym) => interner.resolve(sym).to_string(),
            _ => panic!("expected string literal"),
        }
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(lex_one(r#""hello""#), "hello");
    }

    #[test]
    fn newline_escape_is_canonicalised() {
        assert_eq!(lex_one(r#""a\nb""#), "a\\010b");
    }

    #[test]
    fn hex_escape_is_reencoded_as_decimal_escape() {
        assert_eq!(lex_one(r#""\x41""#), "\\065");
        assert_eq!(lex_one(r#""\x09""#), "\\009");
    }

    #[test]
    fn hash_is_escaped_even_unescaped_in_source() {
        assert_eq!(lex_one(r##""a#b""##), "a\\035b");
    }

    #[test]
    fn bad_hex_escape_is_an_error() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(r#""\xG0""#, &mut interner);
        assert!(lex_single_line(&mut lexer).is_err());
    }
}
