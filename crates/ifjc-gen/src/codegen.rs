//! The emitter: output buffer, label counter, and the `if`/`while`
//! control-flow label stacks.
//!
//! Grounded on the reference generator's `gen_if_*`/`gen_while_*`
//! family for exact label naming and emission order, and on
//! `AsmGenerator`'s `output: String` shape for the struct itself.

use crate::error::CodeGenError;
use crate::float::format_hex_float;

pub struct CodeGen {
    output: String,
    label_counter: u32,
    if_stack: Vec<u32>,
    while_stack: Vec<u32>,
}

impl Default for CodeGen {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen {
            output: String::new(),
            label_counter: 0,
            if_stack: Vec::new(),
            while_stack: Vec::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    fn fresh_label(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    /// `.IFJcode24` header, the three scratch globals, the jump into
    /// `main`, and the built-in prelude.
    pub fn emit_header(&mut self) {
        self.line(".IFJcode24");
        self.line("DEFVAR GF@return");
        self.line("DEFVAR GF@_discard");
        self.line("DEFVAR GF@temp");
        self.line("JUMP $main");
        self.output.push_str(&crate::builtins::prelude());
    }

    pub fn emit_function_prologue(&mut self, name: &str) {
        self.line(format!("\nLABEL ${name}"));
        self.line("CREATEFRAME");
        self.line("PUSHFRAME");
    }

    /// Always emits both `POPFRAME` and `RETURN` — see the design
    /// notes on the original's bare-`POPFRAME` void-return path,
    /// which this rewrite deliberately does not reproduce, since a
    /// missing `RETURN` would never hand control back to the caller's
    /// `CALL`.
    pub fn emit_function_epilogue(&mut self) {
        self.line("POPFRAME");
        self.line("RETURN");
    }

    pub fn emit_main_exit(&mut self) {
        self.line("EXIT int@0");
    }

    pub fn emit_defvar(&mut self, name: &str) {
        self.line(format!("DEFVAR LF@{name}"));
    }

    pub fn emit_pop_into(&mut self, name: &str) {
        self.line(format!("POPS LF@{name}"));
    }

    pub fn emit_pop_discard(&mut self) {
        self.line("POPS GF@_discard");
    }

    pub fn emit_push_var(&mut self, name: &str) {
        self.line(format!("PUSHS LF@{name}"));
    }

    pub fn emit_push_int(&mut self, value: i64) {
        self.line(format!("PUSHS int@{value}"));
    }

    pub fn emit_push_float(&mut self, value: f64) {
        self.line(format!("PUSHS float@{}", format_hex_float(value)));
    }

    pub fn emit_push_string(&mut self, canonical_text: &str) {
        self.line(format!("PUSHS string@{canonical_text}"));
    }

    pub fn emit_push_bool(&mut self, value: bool) {
        self.line(format!("PUSHS bool@{value}"));
    }

    pub fn emit_push_null(&mut self) {
        self.line("PUSHS nil@nil");
    }

    /// Pushes a raw operand verbatim (`GF@return`, `LF@x`, ...) — used
    /// where the target register isn't always a local frame slot, e.g.
    /// reading back a call's return value.
    pub fn emit_push_operand(&mut self, operand: &str) {
        self.line(format!("PUSHS {operand}"));
    }

    /// Pops the stack top into a raw operand verbatim (`GF@return`) —
    /// the counterpart to [`CodeGen::emit_push_operand`], used to land
    /// an evaluated return expression before the epilogue.
    pub fn emit_pop_operand(&mut self, operand: &str) {
        self.line(format!("POPS {operand}"));
    }

    pub fn emit_stack_binop(&mut self, instr: &str) {
        self.line(instr);
    }

    pub fn emit_call(&mut self, label: &str) {
        self.line(format!("CALL {label}"));
    }

    pub fn emit_move(&mut self, dest: &str, src: &str) {
        self.line(format!("MOVE {dest} {src}"));
    }

    pub fn emit_int2float_s(&mut self) {
        self.line("INT2FLOATS");
    }

    // --- if / else / end -------------------------------------------------

    pub fn emit_if_start(&mut self) {
        let label = self.fresh_label();
        self.line(format!("DEFVAR LF@if_cond_{label}"));
        self.line(format!("POPS LF@if_cond_{label}"));
        self.line(format!(
            "JUMPIFEQ $if_else_{label} LF@if_cond_{label} bool@false"
        ));
        self.if_stack.push(label);
    }

    pub fn emit_if_else(&mut self) -> Result<(), CodeGenError> {
        let label = *self.if_stack.last().ok_or(CodeGenError::NoActiveIf)?;
        self.line(format!("JUMP $if_end_{label}"));
        self.line(format!("LABEL $if_else_{label}"));
        Ok(())
    }

    pub fn emit_if_end(&mut self) -> Result<(), CodeGenError> {
        let label = self.if_stack.pop().ok_or(CodeGenError::NoActiveIf)?;
        self.line(format!("LABEL $if_end_{label}"));
        Ok(())
    }

    pub fn emit_if_nullable_start(&mut self, bind_name: &str) {
        let label = self.fresh_label();
        self.line(format!("DEFVAR LF@nullable_check_{label}"));
        self.line(format!("POPS LF@nullable_check_{label}"));
        self.line(format!(
            "JUMPIFEQ $if_nullable_else_{label} LF@nullable_check_{label} nil@nil"
        ));
        self.line(format!("DEFVAR LF@{bind_name}"));
        self.line(format!(
            "MOVE LF@{bind_name} LF@nullable_check_{label}"
        ));
        self.if_stack.push(label);
    }

    pub fn emit_if_nullable_else(&mut self) -> Result<(), CodeGenError> {
        let label = self.if_stack.pop().ok_or(CodeGenError::NoActiveIf)?;
        self.line(format!("JUMP $if_nullable_end_{label}"));
        self.line(format!("LABEL $if_nullable_else_{label}"));
        self.if_stack.push(label);
        Ok(())
    }

    pub fn emit_if_nullable_end(&mut self) -> Result<(), CodeGenError> {
        let label = self.if_stack.pop().ok_or(CodeGenError::NoActiveIf)?;
        self.line(format!("LABEL $if_nullable_end_{label}"));
        Ok(())
    }

    // --- while -------------------------------------------------------

    pub fn emit_while_start(&mut self) {
        let label = self.fresh_label();
        self.line(format!("DEFVAR LF@while_cond_{label}"));
        self.line(format!("LABEL $while_start_{label}"));
        self.while_stack.push(label);
    }

    pub fn emit_while_cond(&mut self) -> Result<(), CodeGenError> {
        let label = *self.while_stack.last().ok_or(CodeGenError::NoActiveWhile)?;
        self.line(format!("POPS LF@while_cond_{label}"));
        self.line(format!(
            "JUMPIFEQ $while_end_{label} LF@while_cond_{label} bool@false"
        ));
        Ok(())
    }

    pub fn emit_while_end(&mut self) -> Result<(), CodeGenError> {
        let label = self.while_stack.pop().ok_or(CodeGenError::NoActiveWhile)?;
        self.line(format!("JUMP $while_start_{label}"));
        self.line(format!("LABEL $while_end_{label}"));
        Ok(())
    }

    pub fn emit_while_nullable_cond(&mut self, bind_name: &str) -> Result<(), CodeGenError> {
        let label = *self.while_stack.last().ok_or(CodeGenError::NoActiveWhile)?;
        self.line(format!("POPS LF@while_cond_{label}"));
        self.line(format!(
            "JUMPIFEQ $while_nullable_end_{label} LF@while_cond_{label} nil@nil"
        ));
        self.line(format!("DEFVAR LF@{bind_name}"));
        self.line(format!("MOVE LF@{bind_name} LF@while_cond_{label}"));
        Ok(())
    }

    pub fn emit_while_nullable_end(&mut self) -> Result<(), CodeGenError> {
        let label = self.while_stack.pop().ok_or(CodeGenError::NoActiveWhile)?;
        self.line(format!("JUMP $while_start_{label}"));
        self.line(format!("LABEL $while_nullable_end_{label}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_starts_with_the_magic_line() {
        let mut gen = CodeGen::new();
        gen.emit_header();
        assert!(gen.into_output().starts_with(".IFJcode24\n"));
    }

    #[test]
    fn if_else_end_uses_matching_labels() {
        let mut gen = CodeGen::new();
        gen.emit_if_start();
        gen.emit_if_else().unwrap();
        gen.emit_if_end().unwrap();
        let out = gen.into_output();
        assert!(out.contains("if_else_0"));
        assert!(out.contains("if_end_0"));
    }

    #[test]
    fn closing_an_if_with_none_open_is_an_internal_error() {
        let mut gen = CodeGen::new();
        assert_eq!(gen.emit_if_end(), Err(CodeGenError::NoActiveIf));
    }

    #[test]
    fn nested_if_blocks_get_distinct_labels() {
        let mut gen = CodeGen::new();
        gen.emit_if_start();
        gen.emit_if_start();
        let out_before = gen.into_output();
        assert!(out_before.contains("if_cond_0"));
        assert!(out_before.contains("if_cond_1"));
    }
}
