//! Operators, punctuation, the `?`-prefixed nullable-type tokens, and
//! `@import`.

use ifjc_util::CompileError;

use crate::token::{Token, TokenKind};

use super::core::Lexer;
use super::identifier;

pub(super) fn lex(lexer: &mut Lexer<'_>) -> Result<Token, CompileError> {
    let span = lexer.span();
    let b = lexer.cursor.bump().unwrap();

    let simple = |kind| Ok(Token::simple(kind, span));

    match b {
        b'+' => simple(TokenKind::Plus),
        b'-' => simple(TokenKind::Minus),
        b'*' => simple(TokenKind::Star),
        b'/' => simple(TokenKind::Slash),
        b'(' => simple(TokenKind::LParen),
        b')' => simple(TokenKind::RParen),
        b'{' => simple(TokenKind::LBrace),
        b'}' => simple(TokenKind::RBrace),
        b'[' => {
            let is_string_type = lexer.cursor.peek() == Some(b']')
                && lexer.cursor.peek_at(1) == Some(b'u')
                && lexer.cursor.peek_at(2) == Some(b'8')
                && !lexer
                    .cursor
                    .peek_at(3)
                    .map(identifier::is_ident_continue)
                    .unwrap_or(false);
            if is_string_type {
                lexer.cursor.bump();
                lexer.cursor.bump();
                lexer.cursor.bump();
                simple(TokenKind::KwStringType)
            } else {
                simple(TokenKind::LBracket)
            }
        }
        b']' => simple(TokenKind::RBracket),
        b',' => simple(TokenKind::Comma),
        b';' => simple(TokenKind::Semicolon),
        b':' => simple(TokenKind::Colon),

        b'!' => {
            if lexer.cursor.peek() == Some(b'=') {
                lexer.cursor.bump();
                simple(TokenKind::Neq)
            } else {
                simple(TokenKind::Not)
            }
        }
        b'=' => {
            if lexer.cursor.peek() == Some(b'=') {
                lexer.cursor.bump();
                simple(TokenKind::Eq)
            } else {
                simple(TokenKind::Assign)
            }
        }
        b'<' => {
            if lexer.cursor.peek() == Some(b'=') {
                lexer.cursor.bump();
                simple(TokenKind::Le)
            } else {
                simple(TokenKind::Lt)
            }
        }
        b'>' => {
            if lexer.cursor.peek() == Some(b'=') {
                lexer.cursor.bump();
                simple(TokenKind::Ge)
            } else {
                simple(TokenKind::Gt)
            }
        }
        b'&' => {
            if lexer.cursor.peek() == Some(b'&') {
                lexer.cursor.bump();
                simple(TokenKind::And)
            } else {
                Err(lexer.error("expected '&&'", span))
            }
        }
        b'|' => {
            if lexer.cursor.peek() == Some(b'|') {
                lexer.cursor.bump();
                simple(TokenKind::Or)
            } else {
                simple(TokenKind::Pipe)
            }
        }

        b'?' => {
            let next_is_type_start = lexer
                .cursor
                .peek()
                .map(|c| c.is_ascii_alphabetic() || c == b'[')
                .unwrap_or(false);
            if next_is_type_start {
                identifier::lex_nullable_type(lexer, span)
            } else {
                simple(TokenKind::Question)
            }
        }

        b'@' => {
            let text = lexer.cursor.eat_while(|c| c.is_ascii_alphabetic());
            if text == b"import" {
                simple(TokenKind::Import)
            } else {
                Err(lexer.error("unrecognised '@'-directive", span))
            }
        }

        other => Err(lexer.error(
            format!("unexpected character '{}'", other as char),
            span,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifjc_util::Interner;

    fn lex_one(src: &str) -> TokenKind {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(src, &mut interner);
        lex(&mut lexer).unwrap().kind
    }

    #[test]
    fn two_char_operators_are_preferred_over_one_char() {
        assert_eq!(lex_one("=="), TokenKind::Eq);
        assert_eq!(lex_one("!="), TokenKind::Neq);
        assert_eq!(lex_one("<="), TokenKind::Le);
        assert_eq!(lex_one(">="), TokenKind::Ge);
    }

    #[test]
    fn nullable_types_are_single_tokens() {
        assert_eq!(lex_one("?i32"), TokenKind::NullableI32);
        assert_eq!(lex_one("?f64"), TokenKind::NullableF64);
        assert_eq!(lex_one("?[]u8"), TokenKind::NullableString);
    }

    #[test]
    fn bare_question_mark_is_its_own_token() {
        assert_eq!(lex_one("? "), TokenKind::Question);
    }

    #[test]
    fn import_directive() {
        assert_eq!(lex_one("@import"), TokenKind::Import);
    }
}
