use std::process::ExitCode;

fn main() -> ExitCode {
    compara_cli::run(std::env::args_os())
}
