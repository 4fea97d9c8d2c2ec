//! Integer and floating-point literals.
//!
//! Grounded on the original scanner's `STATE_INTEGER` / `STATE_FLOAT`
//! / `STATE_EXP_*` states: a leading `0` may only stand alone (never
//! followed by further digits), a `.` must be followed by at least
//! one digit, and an exponent is `[eE][+-]?[0-9]+`.

use ifjc_util::CompileError;

use crate::token::{Literal, Token, TokenKind};

use super::core::Lexer;

pub(super) fn lex(lexer: &mut Lexer<'_>) -> Result<Token, CompileError> {
    let span = lexer.span();
    let first = lexer.cursor.peek().unwrap();

    let int_part = lexer.cursor.eat_while(|b| b.is_ascii_digit());
    if first == b'0' && int_part.len() > 1 {
        return Err(lexer.error(
            "number cannot start with 0 unless it is 0 or a decimal",
            span,
        ));
    }

    let mut text = std::str::from_utf8(int_part).unwrap().to_string();
    let mut is_float = false;

    if lexer.cursor.peek() == Some(b'.') {
        // A bare trailing '.' with no digit after it is not a valid
        // float — leave it for whatever token follows (a syntax
        // error will surface there) rather than consuming it here.
        if lexer.cursor.peek_at(1).map(|b| b.is_ascii_digit()).unwrap_or(false) {
            is_float = true;
            text.push('.');
            lexer.cursor.bump();
            let frac = lexer.cursor.eat_while(|b| b.is_ascii_digit());
            text.push_str(std::str::from_utf8(frac).unwrap());
        }
    }

    if matches!(lexer.cursor.peek(), Some(b'e') | Some(b'E')) {
        let mut exp_text = String::new();
        exp_text.push(lexer.cursor.peek().unwrap() as char);
        lexer.cursor.bump();
        if matches!(lexer.cursor.peek(), Some(b'+') | Some(b'-')) {
            exp_text.push(lexer.cursor.peek().unwrap() as char);
            lexer.cursor.bump();
        }
        let digits = lexer.cursor.eat_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return Err(lexer.error("malformed exponent in numeric literal", span));
        }
        exp_text.push_str(std::str::from_utf8(digits).unwrap());
        is_float = true;
        text.push_str(&exp_text);
    }

    if let Some(b) = lexer.cursor.peek() {
        if b.is_ascii_alphabetic() {
            return Err(lexer.error("invalid character in numeric literal", span));
        }
    }

    if is_float {
        let value: f64 = text
            .parse()
            .map_err(|_| lexer.error("malformed float literal", span))?;
        Ok(Token::new(TokenKind::FloatLit, Literal::Float(value), span))
    } else {
        let value: i64 = text
            .parse()
            .map_err(|_| lexer.error("malformed integer literal", span))?;
        Ok(Token::new(TokenKind::IntLit, Literal::Int(value), span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifjc_util::Interner;

    fn lex_one(src: &str) -> Token {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(src, &mut interner);
        lex(&mut lexer).unwrap()
    }

    #[test]
    fn plain_integer() {
        let tok = lex_one("42");
        assert_eq!(tok.kind, TokenKind::IntLit);
        assert_eq!(tok.literal, Literal::Int(42));
    }

    #[test]
    fn lone_zero_is_accepted() {
        let tok = lex_one("0");
        assert_eq!(tok.literal, Literal::Int(0));
    }

    #[test]
    fn leading_zero_with_more_digits_is_rejected() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("01", &mut interner);
        assert!(lex(&mut lexer).is_err());
    }

    #[test]
    fn float_with_exponent() {
        let tok = lex_one("1.5e10");
        assert_eq!(tok.kind, TokenKind::FloatLit);
        match tok.literal {
            Literal::Float(f) => assert!((f - 1.5e10).abs() < 1.0),
            _ => panic!("expected float literal"),
        }
    }
}
