//! The cursor and the top-level `next_token` dispatch.

use ifjc_util::{CompileError, Interner, Span};

use crate::token::{Token, TokenKind};

use super::{comment, identifier, number, operator, string};

/// A byte-oriented cursor over the whole source buffer, tracking
/// line/column as it advances. IFJ24 source is required to be ASCII
/// outside of string-literal payloads, so byte indexing is sufficient.
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.bump();
        }
        &self.bytes[start..self.pos]
    }
}

/// Drives the scanner: holds the cursor and the interner that
/// identifiers and string literals are resolved through.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) interner: &'a mut Interner,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            interner,
        }
    }

    /// Lexes the whole buffer eagerly, producing a token stream ending
    /// with a single `Eof`. Both compiler passes walk the returned
    /// vector; neither re-invokes the scanner.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.cursor.bump();
                }
                Some(b'/') if self.cursor.peek_at(1) == Some(b'/') => {
                    self.skip_line_comment();
                }
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        comment::skip(&mut self.cursor);
    }

    /// Dispatches on the current byte, mirroring the original scanner's
    /// `STATE_START` switch.
    fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_trivia();
        let span = self.cursor.span();

        let Some(b) = self.cursor.peek() else {
            return Ok(Token::simple(TokenKind::Eof, span));
        };

        match b {
            b'"' => string::lex_single_line(self),
            b'\\' => string::lex_multi_line(self),
            b'0'..=b'9' => number::lex(self),
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => identifier::lex(self),
            _ => operator::lex(self),
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>, span: Span) -> CompileError {
        CompileError::lexical(message, span)
    }

    pub(crate) fn span(&self) -> Span {
        self.cursor.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(src: &str) -> Vec<TokenKind> {
        let mut interner = Interner::new();
        let lexer = Lexer::new(src, &mut interner);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn skips_whitespace_and_comments() {
        let kinds = lex_all("  // a comment\n  +  ");
        assert_eq!(kinds, vec![TokenKind::Plus, TokenKind::Eof]);
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(lex_all(""), vec![TokenKind::Eof]);
    }
}
