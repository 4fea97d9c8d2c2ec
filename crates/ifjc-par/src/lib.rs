//! Expression and statement parsing for IFJ24: the two-pass
//! recursive-descent driver plus the table-driven operator-precedence
//! expression parser it calls into.
//!
//! There is no AST. Both the declaration/statement routines in
//! [`parser`] and the expression reduction rules in [`expr`] emit
//! IFJcode24 directly as they recognise grammar productions, via the
//! `CodeGen` each `Parser` owns.

pub mod expr;
pub mod parser;
pub mod prec;

pub use parser::Parser;
