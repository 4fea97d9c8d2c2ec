//! The compiler driver: stdin in, IFJcode24 out.
//!
//! Grounded on the teacher's `faxc-drv` `Config`/`Session` split,
//! stripped to what a single-file, single-target, non-incremental
//! compiler actually needs.

pub mod config;
pub mod session;

pub use config::Config;
pub use session::Session;

use std::io;
use std::process::ExitCode;

use ifjc_util::CompileError;

/// Runs one compilation against real stdin/stdout, returning the
/// process exit code to use — the compiler's own error taxonomy
/// already assigns one per failure class, so the driver just forwards
/// it (or `0` on success) rather than collapsing everything to `1`.
pub fn run() -> ExitCode {
    let session = Session::new(Config::default());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match session.compile(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.code.exit_code() as u8)
        }
    }
}

fn report(err: &CompileError) {
    eprintln!("{err}");
}
