//! The two-pass recursive-descent driver: prologue, function-header
//! collection, function-body compilation, and every statement form.
//!
//! There is no AST — each routine below recognises one grammar
//! production and immediately asks [`ifjc_gen::CodeGen`] to emit the
//! matching IFJcode24, the same way the reference parser interleaves
//! recognition and generation. Expression parsing (the table-driven
//! shift/reduce algorithm) lives in [`crate::expr`]; this module calls
//! into it wherever the grammar expects an `<expr>`.

use ifjc_gen::CodeGen;
use ifjc_lex::{Literal, Token, TokenKind};
use ifjc_sem::types::ParamKind;
use ifjc_sem::{Entry, FunctionEntry, SymbolTable, Type, VariableEntry};
use ifjc_util::{CompileError, CompileResult, Interner, Span, Symbol};

/// Per-function state that only makes sense while compiling that
/// function's body — reset at the start of every `parse_function_definition`.
struct FunctionContext {
    return_type: Type,
    has_return: bool,
    is_main: bool,
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    interner: &'a mut Interner,
    symtable: SymbolTable,
    codegen: CodeGen,
    current_fn: Option<FunctionContext>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, interner: &'a mut Interner) -> Self {
        let symtable = SymbolTable::new(interner);
        Parser {
            tokens,
            pos: 0,
            interner,
            symtable,
            codegen: CodeGen::new(),
            current_fn: None,
        }
    }

    // --- token cursor -----------------------------------------------

    pub(crate) fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(crate) fn span(&self) -> Span {
        self.current().span
    }

    pub(crate) fn bump(&mut self) -> Token {
        let tok = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> CompileResult<Token> {
        if self.kind() == kind {
            Ok(self.bump())
        } else {
            Err(CompileError::syntax(format!("expected {what}"), self.span()))
        }
    }

    pub(crate) fn text(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }

    pub(crate) fn token_symbol(&self) -> Symbol {
        match self.current().literal {
            Literal::Str(sym) => sym,
            _ => unreachable!("token_symbol called on a token with no string payload"),
        }
    }

    pub(crate) fn symtable(&self) -> &SymbolTable {
        &self.symtable
    }

    pub(crate) fn symtable_mut(&mut self) -> &mut SymbolTable {
        &mut self.symtable
    }

    pub(crate) fn codegen_mut(&mut self) -> &mut CodeGen {
        &mut self.codegen
    }

    // --- top-level driver --------------------------------------------

    /// Lexes, header-collects, rewinds, compiles, and returns the
    /// assembled IFJcode24 text — mirroring `parse_program`'s two full
    /// passes over the same token stream.
    pub fn compile(mut self) -> CompileResult<String> {
        self.codegen.emit_header();

        self.parse_prologue()?;
        let mut has_main = false;
        while self.kind() == TokenKind::KwPub {
            self.bump();
            self.expect(TokenKind::KwFn, "'fn' after 'pub'")?;
            self.parse_function_header(&mut has_main)?;
        }
        if !has_main {
            return Err(CompileError::undefined(
                "program must define a 'main' function",
                self.span(),
            ));
        }

        self.pos = 0;
        self.parse_prologue()?;
        while self.kind() == TokenKind::KwPub {
            self.bump();
            self.expect(TokenKind::KwFn, "'fn' after 'pub'")?;
            self.parse_function_definition()?;
        }

        Ok(self.codegen.into_output())
    }

    fn parse_prologue(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwConst, "'const' to start the prologue")?;
        if self.kind() != TokenKind::Ident || self.text(self.token_symbol()) != "ifj" {
            return Err(CompileError::syntax("expected identifier 'ifj'", self.span()));
        }
        self.bump();
        self.expect(TokenKind::Assign, "'=' in the prologue")?;
        self.expect(TokenKind::Import, "'@import' in the prologue")?;
        self.expect(TokenKind::LParen, "'(' after '@import'")?;
        if self.kind() != TokenKind::StringLit || self.text(self.token_symbol()) != "ifj24.zig" {
            return Err(CompileError::syntax("expected \"ifj24.zig\"", self.span()));
        }
        self.bump();
        self.expect(TokenKind::RParen, "')' after the import path")?;
        self.expect(TokenKind::Semicolon, "';' to end the prologue")?;
        Ok(())
    }

    // --- pass 1: function headers -------------------------------------

    fn parse_function_header(&mut self, has_main: &mut bool) -> CompileResult<()> {
        if self.kind() != TokenKind::Ident {
            return Err(CompileError::syntax(
                "expected a function name",
                self.span(),
            ));
        }
        let name = self.token_symbol();
        let name_text = self.text(name).to_string();
        if self.symtable.find(name).is_some() {
            return Err(CompileError::redefinition(
                format!("function '{name_text}' is already defined"),
                self.span(),
            ));
        }
        let is_main = name_text == "main";
        if is_main {
            *has_main = true;
        }
        self.bump();

        self.expect(TokenKind::LParen, "'(' after the function name")?;
        let params = self.parse_param_signatures()?;
        self.expect(TokenKind::RParen, "')' after the parameter list")?;
        if is_main && !params.is_empty() {
            return Err(CompileError::bad_call(
                "the 'main' function cannot have parameters",
                self.span(),
            ));
        }

        let return_type = self.parse_return_type_token()?;
        if is_main && return_type != Type::Void {
            return Err(CompileError::bad_call(
                "the 'main' function must return void",
                self.span(),
            ));
        }

        self.expect(TokenKind::LBrace, "'{' to start the function body")?;
        // Pass 1 only records the signature; skip the body outright.
        while self.kind() != TokenKind::KwPub && self.kind() != TokenKind::Eof {
            self.bump();
        }

        self.symtable.insert_function(
            name,
            FunctionEntry {
                name,
                defined: true,
                params,
                return_type,
            },
        );
        Ok(())
    }

    fn parse_param_signatures(&mut self) -> CompileResult<Vec<ParamKind>> {
        let mut params = Vec::new();
        if self.kind() == TokenKind::RParen {
            return Ok(params);
        }
        loop {
            if self.kind() != TokenKind::Ident {
                return Err(CompileError::syntax(
                    "expected a parameter name",
                    self.span(),
                ));
            }
            self.bump();
            self.expect(TokenKind::Colon, "':' after the parameter name")?;
            let ty = self.parse_type_token()?;
            params.push(ParamKind::Exact(ty));

            if self.kind() == TokenKind::Comma {
                self.bump();
                if self.kind() != TokenKind::Ident {
                    return Err(CompileError::syntax(
                        "expected a parameter after ','",
                        self.span(),
                    ));
                }
            } else if self.kind() != TokenKind::RParen {
                return Err(CompileError::syntax(
                    "expected ',' or ')' in the parameter list",
                    self.span(),
                ));
            } else {
                break;
            }
        }
        Ok(params)
    }

    fn parse_type_token(&mut self) -> CompileResult<Type> {
        let ty = match self.kind() {
            TokenKind::KwI32 => Type::Int,
            TokenKind::KwF64 => Type::Float,
            TokenKind::KwStringType => Type::Str,
            TokenKind::NullableI32 => Type::NullableInt,
            TokenKind::NullableF64 => Type::NullableFloat,
            TokenKind::NullableString => Type::NullableStr,
            _ => return Err(CompileError::syntax("expected a type", self.span())),
        };
        self.bump();
        Ok(ty)
    }

    fn parse_return_type_token(&mut self) -> CompileResult<Type> {
        if self.kind() == TokenKind::KwVoid {
            self.bump();
            return Ok(Type::Void);
        }
        self.parse_type_token()
    }

    // --- pass 2: function bodies ---------------------------------------

    fn parse_function_definition(&mut self) -> CompileResult<()> {
        if self.kind() != TokenKind::Ident {
            return Err(CompileError::syntax(
                "expected a function name",
                self.span(),
            ));
        }
        let name = self.token_symbol();
        let name_text = self.text(name).to_string();
        let (params, return_type) = match self.symtable.find(name) {
            Some(Entry::Function(f)) => (f.params.clone(), f.return_type),
            _ => {
                return Err(CompileError::undefined(
                    format!("function '{name_text}' was not declared"),
                    self.span(),
                ))
            }
        };

        self.codegen.emit_function_prologue(&name_text);
        self.symtable.enter_scope();

        self.bump();
        self.expect(TokenKind::LParen, "'(' after the function name")?;
        self.parse_param_bindings(&params)?;
        self.expect(TokenKind::RParen, "')' after the parameter list")?;
        self.expect(TokenKind::LBrace, "'{' to start the function body")?;

        self.current_fn = Some(FunctionContext {
            return_type,
            has_return: false,
            is_main: name_text == "main",
        });

        self.parse_statements()?;
        self.expect(TokenKind::RBrace, "'}' to end the function body")?;

        let ctx = self.current_fn.take().unwrap();
        if ctx.return_type != Type::Void && !ctx.has_return {
            return Err(CompileError::return_mismatch(
                format!("function '{name_text}' must return a value"),
                self.span(),
            ));
        }
        if ctx.return_type == Type::Void && !ctx.has_return {
            self.codegen.emit_function_epilogue();
        }
        if ctx.is_main {
            self.codegen.emit_main_exit();
        }

        if let Some(unused) = self.symtable.exit_scope() {
            return Err(CompileError::unused_variable(
                format!("variable '{}' is never used", self.text(unused)),
                self.span(),
            ));
        }
        Ok(())
    }

    fn parse_param_bindings(&mut self, params: &[ParamKind]) -> CompileResult<()> {
        if self.kind() == TokenKind::RParen {
            return Ok(());
        }
        let mut index = 0;
        loop {
            if self.kind() != TokenKind::Ident {
                return Err(CompileError::syntax(
                    "expected a parameter name",
                    self.span(),
                ));
            }
            let name = self.token_symbol();
            let name_text = self.text(name).to_string();
            if self.symtable.find_in_current_scope(name).is_some() {
                return Err(CompileError::redefinition(
                    format!("parameter '{name_text}' redeclared"),
                    self.span(),
                ));
            }
            self.bump();
            self.expect(TokenKind::Colon, "':' after the parameter name")?;
            let ty = self.parse_type_token()?;
            let declared = match params.get(index) {
                Some(ParamKind::Exact(t)) => *t,
                _ => ty,
            };

            self.codegen.emit_defvar(&name_text);
            self.codegen.emit_pop_into(&name_text);
            self.symtable.insert_variable(
                name,
                VariableEntry {
                    name,
                    declared_type: declared,
                    is_const: true,
                    used: false,
                },
            );

            index += 1;
            if self.kind() == TokenKind::Comma {
                self.bump();
            } else if self.kind() != TokenKind::RParen {
                return Err(CompileError::syntax(
                    "expected ',' or ')' in the parameter list",
                    self.span(),
                ));
            } else {
                break;
            }
        }
        Ok(())
    }

    // --- statements -----------------------------------------------------

    fn parse_statements(&mut self) -> CompileResult<()> {
        while self.kind() != TokenKind::RBrace {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_statement(&mut self) -> CompileResult<()> {
        match self.kind() {
            TokenKind::KwVar => self.parse_var_decl(),
            TokenKind::KwConst => self.parse_const_decl(),
            TokenKind::Ident => {
                let name = self.token_symbol();
                self.bump();
                match self.kind() {
                    TokenKind::Assign => self.parse_assignment(Some(name)),
                    TokenKind::LParen => self.parse_call_statement(name),
                    _ => Err(CompileError::syntax(
                        "expected an assignment or a function call",
                        self.span(),
                    )),
                }
            }
            TokenKind::Underscore => {
                self.bump();
                self.parse_assignment(None)
            }
            TokenKind::KwIf => self.parse_if_statement(),
            TokenKind::KwWhile => self.parse_while_statement(),
            TokenKind::KwReturn => self.parse_return_statement(),
            _ => Err(CompileError::syntax(
                "unrecognised statement",
                self.span(),
            )),
        }
    }

    fn parse_var_decl(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwVar, "'var'")?;
        self.parse_declaration(false)
    }

    fn parse_const_decl(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwConst, "'const'")?;
        self.parse_declaration(true)
    }

    /// Shared body of `var`/`const` declarations: the original checks
    /// redefinition against any visible scope here (`symtable_find`),
    /// unlike parameters and unwrap-bindings, which only check the
    /// current scope — that asymmetry is preserved.
    fn parse_declaration(&mut self, is_const: bool) -> CompileResult<()> {
        if self.kind() != TokenKind::Ident {
            return Err(CompileError::syntax("expected a name", self.span()));
        }
        let name = self.token_symbol();
        let name_text = self.text(name).to_string();
        if self.symtable.find(name).is_some() {
            return Err(CompileError::redefinition(
                format!("'{name_text}' is already declared"),
                self.span(),
            ));
        }
        self.bump();

        let mut declared_type = None;
        if self.kind() == TokenKind::Colon {
            self.bump();
            declared_type = Some(self.parse_type_token()?);
        }

        self.expect(TokenKind::Assign, "'=' in the declaration")?;
        self.codegen.emit_defvar(&name_text);
        let expr_type = self.parse_expression()?;

        if expr_type == Type::Null && declared_type.is_none() {
            return Err(CompileError::type_inference(
                "cannot infer a type for 'null' without an explicit annotation",
                self.span(),
            ));
        }

        let final_type = match declared_type {
            None => expr_type,
            Some(declared) => {
                if !Type::accepts(declared, expr_type) {
                    return Err(CompileError::type_incompatible(
                        format!("'{name_text}' declared type does not match its initializer"),
                        self.span(),
                    ));
                }
                declared
            }
        };

        self.codegen.emit_pop_into(&name_text);
        self.expect(TokenKind::Semicolon, "';' to end the declaration")?;

        self.symtable.insert_variable(
            name,
            VariableEntry {
                name,
                declared_type: final_type,
                is_const,
                used: false,
            },
        );
        Ok(())
    }

    fn parse_assignment(&mut self, name: Option<Symbol>) -> CompileResult<()> {
        if let Some(name) = name {
            let name_text = self.text(name).to_string();
            let (declared, is_const) = match self.symtable.find(name) {
                Some(Entry::Variable(v)) => (v.declared_type, v.is_const),
                _ => {
                    return Err(CompileError::undefined(
                        format!("'{name_text}' is not declared"),
                        self.span(),
                    ))
                }
            };
            if is_const {
                return Err(CompileError::redefinition(
                    format!("cannot reassign constant '{name_text}'"),
                    self.span(),
                ));
            }
            if let Some(Entry::Variable(v)) = self.symtable.find_mut(name) {
                v.used = true;
            }

            self.expect(TokenKind::Assign, "'=' in the assignment")?;
            let expr_type = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "';' to end the assignment")?;

            if !Type::accepts(declared, expr_type) {
                return Err(CompileError::type_incompatible(
                    format!("type mismatch assigning to '{name_text}'"),
                    self.span(),
                ));
            }
            self.codegen.emit_pop_into(&name_text);
        } else {
            self.expect(TokenKind::Assign, "'=' in the assignment")?;
            self.parse_expression()?;
            self.codegen.emit_pop_discard();
            self.expect(TokenKind::Semicolon, "';' to end the assignment")?;
        }
        Ok(())
    }

    fn parse_call_statement(&mut self, name: Symbol) -> CompileResult<()> {
        let name_text = self.text(name).to_string();
        let (params, return_type) = match self.symtable.find(name) {
            Some(Entry::Function(f)) => (f.params.clone(), f.return_type),
            _ => {
                return Err(CompileError::undefined(
                    format!("function '{name_text}' was not declared"),
                    self.span(),
                ))
            }
        };
        self.expect(TokenKind::LParen, "'(' after the function name")?;
        self.parse_call_arguments(&name_text, &params)?;
        self.expect(TokenKind::RParen, "')' after the call arguments")?;
        self.expect(TokenKind::Semicolon, "';' after the function call")?;
        if return_type != Type::Void {
            return Err(CompileError::bad_call(
                format!("'{name_text}' returns a value that must be used"),
                self.span(),
            ));
        }
        self.emit_call(&name_text);
        Ok(())
    }

    fn parse_if_statement(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwIf, "'if'")?;
        self.expect(TokenKind::LParen, "'(' after 'if'")?;
        let cond_type = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after the condition")?;

        if self.kind() == TokenKind::Pipe {
            return self.parse_if_nullable_statement(cond_type);
        }
        if cond_type != Type::Bool {
            return Err(CompileError::type_incompatible(
                "the 'if' condition must be a boolean expression",
                self.span(),
            ));
        }

        self.codegen.emit_if_start();
        self.parse_braced_block()?;
        self.codegen
            .emit_if_else()
            .map_err(|e| CompileError::internal(e.to_string()))?;

        self.expect(TokenKind::KwElse, "'else' after the 'if' block")?;
        self.parse_braced_block()?;
        self.codegen
            .emit_if_end()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        Ok(())
    }

    fn parse_if_nullable_statement(&mut self, cond_type: Type) -> CompileResult<()> {
        self.expect(TokenKind::Pipe, "'|' after the nullable condition")?;
        if self.kind() != TokenKind::Ident {
            return Err(CompileError::syntax(
                "expected an identifier after '|'",
                self.span(),
            ));
        }
        let bind_name = self.token_symbol();
        let bind_text = self.text(bind_name).to_string();
        self.codegen.emit_if_nullable_start(&bind_text);
        self.bump();
        self.expect(TokenKind::Pipe, "'|' after the bound name")?;
        self.expect(TokenKind::LBrace, "'{' to start the 'if' block")?;

        self.symtable.enter_scope();
        if self.symtable.find_in_current_scope(bind_name).is_some() {
            return Err(CompileError::redefinition(
                format!("'{bind_text}' redeclared"),
                self.span(),
            ));
        }
        if let Some(base) = cond_type.unwrapped() {
            self.symtable.insert_variable(
                bind_name,
                VariableEntry {
                    name: bind_name,
                    declared_type: base,
                    is_const: false,
                    used: false,
                },
            );
        }

        self.parse_statements()?;
        self.expect(TokenKind::RBrace, "'}' to end the 'if' block")?;
        if let Some(unused) = self.symtable.exit_scope() {
            return Err(CompileError::unused_variable(
                format!("variable '{}' is never used", self.text(unused)),
                self.span(),
            ));
        }

        self.expect(TokenKind::KwElse, "'else' after the 'if' block")?;
        self.codegen
            .emit_if_nullable_else()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        self.parse_braced_block()?;
        self.codegen
            .emit_if_nullable_end()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        Ok(())
    }

    fn parse_while_statement(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwWhile, "'while'")?;
        self.expect(TokenKind::LParen, "'(' after 'while'")?;
        self.codegen.emit_while_start();
        let cond_type = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after the condition")?;

        if self.kind() == TokenKind::Pipe {
            return self.parse_while_nullable_statement(cond_type);
        }
        if cond_type != Type::Bool {
            return Err(CompileError::type_incompatible(
                "the 'while' condition must be a boolean expression",
                self.span(),
            ));
        }
        self.codegen
            .emit_while_cond()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        self.parse_braced_block()?;
        self.codegen
            .emit_while_end()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        Ok(())
    }

    fn parse_while_nullable_statement(&mut self, cond_type: Type) -> CompileResult<()> {
        self.expect(TokenKind::Pipe, "'|' after the nullable condition")?;
        if self.kind() != TokenKind::Ident {
            return Err(CompileError::syntax(
                "expected an identifier after '|'",
                self.span(),
            ));
        }
        let bind_name = self.token_symbol();
        let bind_text = self.text(bind_name).to_string();
        self.codegen
            .emit_while_nullable_cond(&bind_text)
            .map_err(|e| CompileError::internal(e.to_string()))?;
        self.bump();
        self.expect(TokenKind::Pipe, "'|' after the bound name")?;
        self.expect(TokenKind::LBrace, "'{' to start the 'while' block")?;

        self.symtable.enter_scope();
        if self.symtable.find_in_current_scope(bind_name).is_some() {
            return Err(CompileError::redefinition(
                format!("'{bind_text}' redeclared"),
                self.span(),
            ));
        }
        if let Some(base) = cond_type.unwrapped() {
            self.symtable.insert_variable(
                bind_name,
                VariableEntry {
                    name: bind_name,
                    declared_type: base,
                    is_const: false,
                    used: false,
                },
            );
        }

        self.parse_statements()?;
        self.expect(TokenKind::RBrace, "'}' to end the 'while' block")?;
        if let Some(unused) = self.symtable.exit_scope() {
            return Err(CompileError::unused_variable(
                format!("variable '{}' is never used", self.text(unused)),
                self.span(),
            ));
        }
        self.codegen
            .emit_while_nullable_end()
            .map_err(|e| CompileError::internal(e.to_string()))?;
        Ok(())
    }

    /// `{` statements `}`, with its own scope — shared by plain `if`,
    /// `else`, and `while` bodies (the nullable variants open their
    /// scope earlier, to bind the unwrapped name, so they don't call
    /// this helper).
    fn parse_braced_block(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LBrace, "'{' to start the block")?;
        self.symtable.enter_scope();
        self.parse_statements()?;
        self.expect(TokenKind::RBrace, "'}' to end the block")?;
        if let Some(unused) = self.symtable.exit_scope() {
            return Err(CompileError::unused_variable(
                format!("variable '{}' is never used", self.text(unused)),
                self.span(),
            ));
        }
        Ok(())
    }

    fn parse_return_statement(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::KwReturn, "'return'")?;
        let return_type = self
            .current_fn
            .as_ref()
            .map(|c| c.return_type)
            .unwrap_or(Type::Invalid);

        if self.kind() == TokenKind::Semicolon {
            if return_type != Type::Void {
                return Err(CompileError::return_mismatch(
                    "a non-void function must return a value",
                    self.span(),
                ));
            }
            self.bump();
            self.codegen.emit_function_epilogue();
        } else {
            let expr_type = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "';' to end the return statement")?;
            if return_type == Type::Void {
                return Err(CompileError::return_mismatch(
                    "a void function must not return a value",
                    self.span(),
                ));
            }
            if return_type != expr_type {
                return Err(CompileError::bad_call(
                    "the returned value's type does not match the function's declared return type",
                    self.span(),
                ));
            }
            self.codegen.emit_pop_operand("GF@return");
            self.codegen.emit_function_epilogue();
        }

        if let Some(ctx) = self.current_fn.as_mut() {
            ctx.has_return = true;
        }
        Ok(())
    }

    // --- function calls (statement position) ---------------------------

    pub(crate) fn parse_call_arguments(
        &mut self,
        func_name: &str,
        params: &[ParamKind],
    ) -> CompileResult<()> {
        let mut index = 0;
        while self.kind() != TokenKind::RParen {
            if index >= params.len() {
                return Err(CompileError::bad_call(
                    format!("too many arguments to '{func_name}'"),
                    self.span(),
                ));
            }
            let arg_type = self.parse_expression()?;
            if !params[index].accepts(arg_type) {
                return Err(CompileError::bad_call(
                    format!("argument {} to '{func_name}' has the wrong type", index + 1),
                    self.span(),
                ));
            }
            index += 1;
            if self.kind() == TokenKind::Comma {
                self.bump();
            }
        }
        if index != params.len() {
            return Err(CompileError::bad_call(
                format!("too few arguments to '{func_name}'"),
                self.span(),
            ));
        }
        Ok(())
    }

    pub(crate) fn emit_call(&mut self, func_name: &str) {
        match ifjc_gen::builtins::call_label(func_name) {
            Some(label) => self.codegen.emit_call(label),
            None => self.codegen.emit_call(&format!("${func_name}")),
        }
    }
}
