//! Table-driven operator-precedence expression parsing.
//!
//! This is a classic shift/reduce precedence parser over the 17×17
//! table in [`crate::prec`], not the teacher's Pratt/binding-power
//! algorithm — the grammar here calls for an explicit precedence
//! relation between terminal categories, so the driving loop and the
//! four reduction schemas are grounded directly on the original
//! generator's `parse_expr`/`reduce`/`check_*_compatibility` instead.
//!
//! There is no expression tree: each reduction emits its IFJcode24
//! immediately, the operand values already sitting on the target
//! machine's own evaluation stack from earlier reductions.

use ifjc_lex::{Literal, TokenKind};
use ifjc_sem::{Entry, Type};
use ifjc_util::{CompileError, CompileResult};

use crate::parser::Parser;
use crate::prec::{relation, Action, PrecSymbol, StackEntry};

impl<'a> Parser<'a> {
    /// Runs the shift/reduce loop to parse one expression, returning
    /// its static type. Leaves the cursor on the first token that is
    /// not part of the expression (a `)` belonging to an enclosing
    /// call, a `,`, a `;`, or a `|`).
    pub fn parse_expression(&mut self) -> CompileResult<Type> {
        let mut stack = vec![StackEntry::dollar()];
        let mut bracket_count: i32 = 0;
        let mut lookahead = self.classify(&mut bracket_count)?;

        loop {
            let top_idx = top_terminal_index(&stack)?;
            let top_symbol = stack[top_idx].symbol.unwrap();
            let cur_symbol = lookahead
                .symbol
                .ok_or_else(|| CompileError::internal("expression terminal missing a symbol"))?;

            if top_symbol == PrecSymbol::Dollar && cur_symbol == PrecSymbol::Dollar {
                break;
            }

            match relation(top_symbol, cur_symbol) {
                Action::Shift | Action::Equal => {
                    stack.push(lookahead);
                    lookahead = self.classify(&mut bracket_count)?;
                }
                Action::Reduce => {
                    self.reduce(&mut stack)?;
                }
                Action::Undefined => {
                    return Err(CompileError::syntax(
                        "unexpected token in expression",
                        self.span(),
                    ))
                }
            }
        }

        match stack.as_slice() {
            [dollar, exp] if dollar.symbol == Some(PrecSymbol::Dollar) && exp.is_exp => Ok(exp.ty),
            _ => Err(CompileError::syntax(
                "malformed expression",
                self.span(),
            )),
        }
    }

    /// Classifies the current token into a precedence terminal,
    /// advancing the cursor past whatever it consumes. A `)`, `,`,
    /// `;`, `|`, or end-of-input seen while `bracket_count` is zero
    /// belongs to the surrounding construct (a call's argument list,
    /// a statement terminator, an unwrap binder) rather than to this
    /// expression, and is reported as the `$` terminal without being
    /// consumed.
    fn classify(&mut self, bracket_count: &mut i32) -> CompileResult<StackEntry> {
        let tok = self.current();

        let boundary = matches!(
            tok.kind,
            TokenKind::Comma | TokenKind::Semicolon | TokenKind::Pipe | TokenKind::Eof
        ) || (tok.kind == TokenKind::RParen && *bracket_count == 0);
        if boundary {
            return Ok(StackEntry::dollar());
        }

        let simple = |sym: PrecSymbol| {
            Ok(StackEntry::terminal(sym, Type::Invalid, false, tok))
        };

        match tok.kind {
            TokenKind::Plus => {
                self.bump();
                simple(PrecSymbol::Add)
            }
            TokenKind::Minus => {
                self.bump();
                simple(PrecSymbol::Sub)
            }
            TokenKind::Star => {
                self.bump();
                simple(PrecSymbol::Mul)
            }
            TokenKind::Slash => {
                self.bump();
                simple(PrecSymbol::Div)
            }
            TokenKind::Eq => {
                self.bump();
                simple(PrecSymbol::Eq)
            }
            TokenKind::Neq => {
                self.bump();
                simple(PrecSymbol::Neq)
            }
            TokenKind::Not => {
                self.bump();
                simple(PrecSymbol::Not)
            }
            TokenKind::Lt => {
                self.bump();
                simple(PrecSymbol::Lt)
            }
            TokenKind::Gt => {
                self.bump();
                simple(PrecSymbol::Gt)
            }
            TokenKind::Le => {
                self.bump();
                simple(PrecSymbol::Le)
            }
            TokenKind::Ge => {
                self.bump();
                simple(PrecSymbol::Ge)
            }
            TokenKind::And => {
                self.bump();
                simple(PrecSymbol::And)
            }
            TokenKind::Or => {
                self.bump();
                simple(PrecSymbol::Or)
            }
            TokenKind::LParen => {
                *bracket_count += 1;
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::LParen, Type::Invalid, false, tok))
            }
            TokenKind::RParen => {
                *bracket_count -= 1;
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::RParen, Type::Invalid, false, tok))
            }
            TokenKind::IntLit => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::Int, true, tok))
            }
            TokenKind::FloatLit => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::Float, true, tok))
            }
            TokenKind::StringLit => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::Str, true, tok))
            }
            TokenKind::KwNull => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::Null, true, tok))
            }
            // A bare nullable-type token in operand position stands for
            // the null value of that base type; the original scanner
            // leaves these non-literal, which sends them into the
            // identifier-lookup reduction instead of the literal-push
            // one and crashes on the missing symbol-table entry. This
            // rewrite treats them as literal `nil@nil` operands of the
            // matching nullable type instead.
            TokenKind::NullableI32 => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::NullableInt, true, tok))
            }
            TokenKind::NullableF64 => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::NullableFloat, true, tok))
            }
            TokenKind::NullableString => {
                self.bump();
                Ok(StackEntry::terminal(PrecSymbol::Id, Type::NullableStr, true, tok))
            }
            TokenKind::Ident => self.classify_ident(),
            _ => Err(CompileError::syntax(
                "unexpected token in expression",
                self.span(),
            )),
        }
    }

    /// An identifier in operand position is either a function call
    /// (parsed eagerly, right here, so its `CALL` lands before the
    /// operator that consumes its result) or a variable reference.
    fn classify_ident(&mut self) -> CompileResult<StackEntry> {
        let tok = self.current();
        let name = match tok.literal {
            Literal::Str(sym) => sym,
            _ => return Err(CompileError::internal("identifier token missing text")),
        };
        let name_text = self.text(name).to_string();
        self.bump();

        if self.kind() == TokenKind::LParen {
            let (params, return_type) = match self.symtable().find(name) {
                Some(Entry::Function(f)) => (f.params.clone(), f.return_type),
                _ => {
                    return Err(CompileError::undefined(
                        format!("function '{name_text}' was not declared"),
                        tok.span,
                    ))
                }
            };
            self.bump();
            self.parse_call_arguments(&name_text, &params)?;
            self.expect(TokenKind::RParen, "')' after the call arguments")?;
            if return_type == Type::Void {
                return Err(CompileError::bad_call(
                    format!("'{name_text}' does not return a value"),
                    tok.span,
                ));
            }
            self.emit_call(&name_text);
            return Ok(StackEntry::identifier(return_type, "GF@return".to_string()));
        }

        match self.symtable_mut().find_mut(name) {
            Some(Entry::Variable(v)) => {
                v.used = true;
                let declared_type = v.declared_type;
                Ok(StackEntry::identifier(declared_type, format!("LF@{name_text}")))
            }
            Some(Entry::Function(_)) => Err(CompileError::bad_call(
                format!("'{name_text}' is a function; call it with '()'"),
                tok.span,
            )),
            None => Err(CompileError::undefined(
                format!("'{name_text}' is not declared"),
                tok.span,
            )),
        }
    }

    /// Applies the first grammar rule that matches the top of the
    /// stack: `id` → `E`, `(E)` → `E`, `E op E` → `E`, or `!E` → `E`.
    fn reduce(&mut self, stack: &mut Vec<StackEntry>) -> CompileResult<()> {
        let len = stack.len();

        if len >= 3 {
            let (lhs, op, rhs) = (&stack[len - 3], &stack[len - 2], &stack[len - 1]);
            if lhs.symbol == Some(PrecSymbol::LParen)
                && op.is_exp
                && rhs.symbol == Some(PrecSymbol::RParen)
            {
                let ty = op.ty;
                stack.truncate(len - 3);
                // Matches the original: the parentheses themselves are
                // never literal tokens, so `(E)` is never folded as a
                // compile-time constant even when `E` is.
                stack.push(StackEntry::expr(ty, false));
                return Ok(());
            }
            if lhs.is_exp && rhs.is_exp {
                if let Some(op_symbol) = op.symbol {
                    return self.reduce_binop(stack, op_symbol);
                }
            }
        }

        if len >= 2 {
            let (op, operand) = (&stack[len - 2], &stack[len - 1]);
            if op.symbol == Some(PrecSymbol::Not) && operand.is_exp {
                if operand.ty != Type::Bool {
                    return Err(CompileError::type_incompatible(
                        "'!' requires a boolean operand",
                        self.span(),
                    ));
                }
                let is_literal = operand.is_literal;
                self.codegen_mut().emit_stack_binop("NOTS");
                stack.truncate(len - 2);
                stack.push(StackEntry::expr(Type::Bool, is_literal));
                return Ok(());
            }
        }

        if len >= 1 {
            let top = &stack[len - 1];
            if top.symbol == Some(PrecSymbol::Id) {
                let (ty, is_literal) = (top.ty, top.is_literal);
                if is_literal {
                    self.emit_literal_push(top)?;
                } else {
                    let operand = top
                        .operand
                        .clone()
                        .ok_or_else(|| CompileError::internal("identifier entry missing operand"))?;
                    self.codegen_mut().emit_push_operand(&operand);
                }
                stack.truncate(len - 1);
                stack.push(StackEntry::expr(ty, is_literal));
                return Ok(());
            }
        }

        Err(CompileError::syntax(
            "could not reduce the expression stack",
            self.span(),
        ))
    }

    fn emit_literal_push(&mut self, entry: &StackEntry) -> CompileResult<()> {
        match entry.ty {
            Type::Int => {
                let Literal::Int(value) = entry.token.unwrap().literal else {
                    return Err(CompileError::internal("int literal missing its value"));
                };
                self.codegen_mut().emit_push_int(value);
            }
            Type::Float => {
                let Literal::Float(value) = entry.token.unwrap().literal else {
                    return Err(CompileError::internal("float literal missing its value"));
                };
                self.codegen_mut().emit_push_float(value);
            }
            Type::Str => {
                let Literal::Str(sym) = entry.token.unwrap().literal else {
                    return Err(CompileError::internal("string literal missing its text"));
                };
                let text = self.text(sym).to_string();
                self.codegen_mut().emit_push_string(&text);
            }
            Type::Null | Type::NullableInt | Type::NullableFloat | Type::NullableStr => {
                self.codegen_mut().emit_push_null();
            }
            _ => return Err(CompileError::internal("unsupported literal type")),
        }
        Ok(())
    }

    fn reduce_binop(&mut self, stack: &mut Vec<StackEntry>, op: PrecSymbol) -> CompileResult<()> {
        let len = stack.len();
        let lhs = stack[len - 3].clone();
        let rhs = stack[len - 1].clone();

        let result_type = match op {
            PrecSymbol::Add | PrecSymbol::Sub | PrecSymbol::Mul | PrecSymbol::Div => {
                self.check_arithmetic_compatibility(lhs.ty, rhs.ty, lhs.is_literal, rhs.is_literal)?
            }
            PrecSymbol::And | PrecSymbol::Or => Type::Bool,
            PrecSymbol::Eq | PrecSymbol::Neq => {
                self.check_equality_compatibility(lhs.ty, rhs.ty, lhs.is_literal, rhs.is_literal)?
            }
            PrecSymbol::Lt | PrecSymbol::Gt | PrecSymbol::Le | PrecSymbol::Ge => {
                self.check_relational_compatibility(lhs.ty, rhs.ty, lhs.is_literal, rhs.is_literal)?
            }
            _ => return Err(CompileError::internal("unexpected operator in reduce_binop")),
        };

        let gen = self.codegen_mut();
        match op {
            PrecSymbol::Add => gen.emit_stack_binop("ADDS"),
            PrecSymbol::Sub => gen.emit_stack_binop("SUBS"),
            PrecSymbol::Mul => gen.emit_stack_binop("MULS"),
            PrecSymbol::Div => gen.emit_stack_binop("DIVS"),
            PrecSymbol::And => gen.emit_stack_binop("ANDS"),
            PrecSymbol::Or => gen.emit_stack_binop("ORS"),
            PrecSymbol::Eq => gen.emit_stack_binop("EQS"),
            PrecSymbol::Neq => {
                gen.emit_stack_binop("EQS");
                gen.emit_stack_binop("NOTS");
            }
            PrecSymbol::Lt => gen.emit_stack_binop("LTS"),
            PrecSymbol::Gt => gen.emit_stack_binop("GTS"),
            PrecSymbol::Ge => {
                gen.emit_stack_binop("LTS");
                gen.emit_stack_binop("NOTS");
            }
            PrecSymbol::Le => {
                gen.emit_stack_binop("GTS");
                gen.emit_stack_binop("NOTS");
            }
            _ => unreachable!(),
        }

        let is_literal = lhs.is_literal && rhs.is_literal;
        stack.truncate(len - 3);
        stack.push(StackEntry::expr(result_type, is_literal));
        Ok(())
    }

    /// `int op int` / `float op float` pass through unchanged; mixing
    /// the two is only legal when the `int` side is a literal, which
    /// gets widened in place with `INT2FLOATS` — a non-literal `int`
    /// can never silently become a `float`.
    fn check_arithmetic_compatibility(
        &mut self,
        lhs_ty: Type,
        rhs_ty: Type,
        lhs_is_literal: bool,
        rhs_is_literal: bool,
    ) -> CompileResult<Type> {
        match (lhs_ty, rhs_ty) {
            (Type::Int, Type::Int) => Ok(Type::Int),
            (Type::Float, Type::Float) => Ok(Type::Float),
            (Type::Int, Type::Float) => {
                if !lhs_is_literal {
                    return Err(CompileError::type_incompatible(
                        "cannot mix int and float in an arithmetic operation",
                        self.span(),
                    ));
                }
                // lhs sits below the top of the evaluation stack;
                // shuffle rhs out of the way, widen lhs, put rhs back.
                let gen = self.codegen_mut();
                gen.emit_pop_operand("GF@temp");
                gen.emit_int2float_s();
                gen.emit_push_operand("GF@temp");
                Ok(Type::Float)
            }
            (Type::Float, Type::Int) => {
                if !rhs_is_literal {
                    return Err(CompileError::type_incompatible(
                        "cannot mix int and float in an arithmetic operation",
                        self.span(),
                    ));
                }
                self.codegen_mut().emit_int2float_s();
                Ok(Type::Float)
            }
            _ => Err(CompileError::type_incompatible(
                "incompatible types for an arithmetic operation",
                self.span(),
            )),
        }
    }

    /// Equality is looser than arithmetic about which side must be the
    /// literal (either operand being a literal licenses the widen),
    /// and additionally allows comparing `null` against any nullable
    /// type or its own base type — but, matching the asymmetry in the
    /// reference compiler, NOT a bare string against a nullable string.
    fn check_equality_compatibility(
        &mut self,
        lhs_ty: Type,
        rhs_ty: Type,
        lhs_is_literal: bool,
        rhs_is_literal: bool,
    ) -> CompileResult<Type> {
        if lhs_ty == rhs_ty {
            return Ok(Type::Bool);
        }
        if matches!(
            (lhs_ty, rhs_ty),
            (Type::Int, Type::Float) | (Type::Float, Type::Int)
        ) {
            if lhs_ty == Type::Int && (lhs_is_literal || rhs_is_literal) {
                let gen = self.codegen_mut();
                gen.emit_pop_operand("GF@temp");
                gen.emit_int2float_s();
                gen.emit_push_operand("GF@temp");
            } else if rhs_ty == Type::Int && (rhs_is_literal || lhs_is_literal) {
                self.codegen_mut().emit_int2float_s();
            } else {
                return Err(CompileError::type_incompatible(
                    "incompatible types for an equality operation",
                    self.span(),
                ));
            }
            return Ok(Type::Bool);
        }
        let null_compatible = lhs_ty == Type::Null
            || rhs_ty == Type::Null
            || (lhs_ty == Type::NullableInt && rhs_ty == Type::Int)
            || (lhs_ty == Type::Int && rhs_ty == Type::NullableInt)
            || (lhs_ty == Type::NullableFloat && rhs_ty == Type::Float)
            || (lhs_ty == Type::Float && rhs_ty == Type::NullableFloat);
        if null_compatible {
            return Ok(Type::Bool);
        }
        Err(CompileError::type_incompatible(
            "incompatible types for an equality operation",
            self.span(),
        ))
    }

    /// `null` is never allowed on either side. Mixed int/float is
    /// legal only when the float side is NOT a literal — the inverse
    /// of the arithmetic rule — because a literal float would mean
    /// both sides had a fixed, staticaly-known type that simply don't
    /// match.
    fn check_relational_compatibility(
        &mut self,
        lhs_ty: Type,
        rhs_ty: Type,
        lhs_is_literal: bool,
        rhs_is_literal: bool,
    ) -> CompileResult<Type> {
        if lhs_ty == Type::Null || rhs_ty == Type::Null {
            return Err(CompileError::type_incompatible(
                "'null' is not allowed in a relational operation",
                self.span(),
            ));
        }
        if lhs_ty == rhs_ty {
            return Ok(Type::Bool);
        }
        if matches!(
            (lhs_ty, rhs_ty),
            (Type::Int, Type::Float) | (Type::Float, Type::Int)
        ) {
            if lhs_ty == Type::Float && !lhs_is_literal {
                self.codegen_mut().emit_int2float_s();
            } else if rhs_ty == Type::Float && !rhs_is_literal {
                let gen = self.codegen_mut();
                gen.emit_pop_operand("GF@temp");
                gen.emit_int2float_s();
                gen.emit_push_operand("GF@temp");
            } else {
                return Err(CompileError::type_incompatible(
                    "incompatible types for a relational operation",
                    self.span(),
                ));
            }
            return Ok(Type::Bool);
        }
        Err(CompileError::type_incompatible(
            "incompatible types for a relational operation",
            self.span(),
        ))
    }
}

/// The topmost stack entry that is a terminal (not a reduced `E`) —
/// the operator-precedence relation is always evaluated between this
/// entry and the lookahead, skipping over any already-reduced
/// expression sitting above it.
fn top_terminal_index(stack: &[StackEntry]) -> CompileResult<usize> {
    stack
        .iter()
        .rposition(|entry| !entry.is_exp)
        .ok_or_else(|| CompileError::internal("expression stack has no terminal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_terminal_index_skips_a_reduced_expression() {
        let stack = vec![
            StackEntry::dollar(),
            StackEntry::terminal(PrecSymbol::Add, Type::Invalid, false, dummy_token()),
            StackEntry::expr(Type::Int, true),
        ];
        assert_eq!(top_terminal_index(&stack).unwrap(), 1);
    }

    #[test]
    fn top_terminal_index_rejects_an_all_expression_stack() {
        let stack = vec![StackEntry::expr(Type::Int, true)];
        assert!(top_terminal_index(&stack).is_err());
    }

    fn dummy_token() -> ifjc_lex::Token {
        ifjc_lex::Token::simple(TokenKind::Plus, ifjc_util::Span::dummy())
    }
}
