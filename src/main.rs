use std::process::ExitCode;

fn main() -> ExitCode {
    llex::cli::run()
}
