use std::process::ExitCode;

fn main() -> ExitCode {
    match tcal::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tcal: {e}");
            ExitCode::FAILURE
        }
    }
}
