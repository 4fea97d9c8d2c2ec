use std::process::ExitCode;

fn main() -> ExitCode {
    ifjc_drv::run()
}
