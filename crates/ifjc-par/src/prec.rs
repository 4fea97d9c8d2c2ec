//! The 17×17 operator-precedence table and stack representation.
//!
//! The table is carried across unchanged from the reference
//! implementation's `pars_expr.c` — its exact shift/reduce/equal
//! relations are the one piece of this parser that must not drift
//! from the original, since any other table would change which
//! expressions parse and how operators associate.

use ifjc_lex::Token;
use ifjc_sem::Type;

/// A terminal category in the precedence grammar. `Id` stands for any
/// literal, identifier, or nullable-type token that can start a
/// primary expression — the table treats them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum PrecSymbol {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Div = 3,
    Eq = 4,
    Neq = 5,
    Not = 6,
    Lt = 7,
    Gt = 8,
    Le = 9,
    Ge = 10,
    And = 11,
    Or = 12,
    LParen = 13,
    RParen = 14,
    Id = 15,
    Dollar = 16,
}

const N: usize = 17;

/// Shift (`<`), reduce (`>`), equal (`=`, only between matching
/// parentheses), or undefined (syntax error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift,
    Reduce,
    Equal,
    Undefined,
}

// Row/column order: + - * / == != ! < > <= >= && || ( ) i $
#[rustfmt::skip]
const TABLE: [[u8; N]; N] = [
    [b'>', b'>', b'<', b'<', b'>', b'>', b'<', b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'<', b'>'], // +
    [b'>', b'>', b'<', b'<', b'>', b'>', b'<', b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'<', b'>'], // -
    [b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'<', b'>'], // *
    [b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'<', b'>'], // /
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // ==
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // !=
    [b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'>', b'<', b'>', b'<', b'>'], // !
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // <
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // >
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // <=
    [b'<', b'<', b'<', b'<', 0,    0,    b'<', 0,    0,    0,    0,    b'>', b'>', b'<', b'>', b'<', b'>'], // >=
    [b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'>', b'>', b'<', b'>', b'<', b'>'], // &&
    [b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'>', b'<', b'>', b'<', b'>'], // ||
    [b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'=', b'<', 0   ], // (
    [b'>', b'>', b'>', b'>', b'>', b'>', 0,    b'>', b'>', b'>', b'>', b'>', b'>', 0,    b'>', 0,    b'>'], // )
    [b'>', b'>', b'>', b'>', b'>', b'>', 0,    b'>', b'>', b'>', b'>', b'>', b'>', 0,    b'>', 0,    b'>'], // i
    [b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', b'<', 0,    b'<', 0   ], // $
];

pub fn relation(top: PrecSymbol, current: PrecSymbol) -> Action {
    match TABLE[top as usize][current as usize] {
        b'<' => Action::Shift,
        b'>' => Action::Reduce,
        b'=' => Action::Equal,
        _ => Action::Undefined,
    }
}

/// One entry of the precedence stack: either a shifted terminal or a
/// reduced expression (`Exp`, tagged `is_exp`).
#[derive(Debug, Clone)]
pub struct StackEntry {
    pub symbol: Option<PrecSymbol>,
    pub is_exp: bool,
    pub ty: Type,
    pub is_literal: bool,
    pub token: Option<Token>,
    /// For a non-literal `id` terminal (a variable reference or an
    /// already-evaluated call), the exact operand `PUSHS` should read
    /// at reduction time (`LF@x` or `GF@return`) — computed once when
    /// the identifier is classified, rather than re-resolved against
    /// the symbol table a second time at reduce time.
    pub operand: Option<String>,
}

impl StackEntry {
    pub fn terminal(symbol: PrecSymbol, ty: Type, is_literal: bool, token: Token) -> Self {
        StackEntry {
            symbol: Some(symbol),
            is_exp: false,
            ty,
            is_literal,
            token: Some(token),
            operand: None,
        }
    }

    pub fn dollar() -> Self {
        StackEntry {
            symbol: Some(PrecSymbol::Dollar),
            is_exp: false,
            ty: Type::Void,
            is_literal: false,
            token: None,
            operand: None,
        }
    }

    pub fn identifier(ty: Type, operand: String) -> Self {
        StackEntry {
            symbol: Some(PrecSymbol::Id),
            is_exp: false,
            ty,
            is_literal: false,
            token: None,
            operand: Some(operand),
        }
    }

    pub fn expr(ty: Type, is_literal: bool) -> Self {
        StackEntry {
            symbol: None,
            is_exp: true,
            ty,
            is_literal,
            token: None,
            operand: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // '+' on top of stack, '*' incoming: shift (build up the '*'
        // subexpression before reducing the '+').
        assert_eq!(relation(PrecSymbol::Add, PrecSymbol::Mul), Action::Shift);
        // '*' on top, '+' incoming: reduce (finish the '*' first).
        assert_eq!(relation(PrecSymbol::Mul, PrecSymbol::Add), Action::Reduce);
    }

    #[test]
    fn equality_operators_do_not_chain() {
        assert_eq!(relation(PrecSymbol::Eq, PrecSymbol::Eq), Action::Undefined);
    }

    #[test]
    fn matching_parens_are_the_equal_relation() {
        assert_eq!(relation(PrecSymbol::LParen, PrecSymbol::RParen), Action::Equal);
    }

    #[test]
    fn dollar_bottom_shifts_everything_but_itself() {
        assert_eq!(relation(PrecSymbol::Dollar, PrecSymbol::Id), Action::Shift);
        assert_eq!(relation(PrecSymbol::Dollar, PrecSymbol::Dollar), Action::Undefined);
    }
}
