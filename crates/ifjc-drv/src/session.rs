//! Orchestrates one compilation: read stdin, lex, parse+generate,
//! write stdout.
//!
//! Grounded on the teacher's `Session::compile` staging (read sources,
//! run the pipeline, emit output, surface the first error), reduced to
//! the single in-memory buffer and single typed [`CompileError`] this
//! compiler's pipeline produces — there is no multi-file diagnostic
//! aggregation to do, since compilation stops at the first error.

use std::io::{Read, Write};

use ifjc_lex::Lexer;
use ifjc_par::Parser;
use ifjc_util::{CompileError, CompileResult, Interner};

use crate::config::Config;

pub struct Session {
    #[allow(dead_code)]
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    /// Reads the whole program from `input`, compiles it, and writes
    /// the generated IFJcode24 to `output`. Returns the first
    /// [`CompileError`] encountered, if any — compilation does not
    /// attempt to recover and keep looking for more.
    pub fn compile(&self, input: &mut impl Read, output: &mut impl Write) -> CompileResult<()> {
        let mut source = String::new();
        input
            .read_to_string(&mut source)
            .map_err(|e| CompileError::internal(format!("failed to read source: {e}")))?;

        let mut interner = Interner::new();
        let tokens = Lexer::new(&source, &mut interner).tokenize()?;
        let generated = Parser::new(tokens, &mut interner).compile()?;

        output
            .write_all(generated.as_bytes())
            .map_err(|e| CompileError::internal(format!("failed to write output: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_program_with_no_main_function() {
        let session = Session::new(Config::default());
        let mut input = std::io::Cursor::new(
            "const ifj = @import(\"ifj24.zig\");\npub fn helper() void {\n}\n",
        );
        let mut output = Vec::new();
        let err = session.compile(&mut input, &mut output).unwrap_err();
        assert_eq!(err.code, ifjc_util::ErrorCode::UndefinedSymbol);
    }

    #[test]
    fn compiles_the_smallest_valid_program() {
        let session = Session::new(Config::default());
        let mut input = std::io::Cursor::new(
            "const ifj = @import(\"ifj24.zig\");\npub fn main() void {\n}\n",
        );
        let mut output = Vec::new();
        session.compile(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(".IFJcode24\n"));
        assert!(text.contains("LABEL $main"));
    }
}
