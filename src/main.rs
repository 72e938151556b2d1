use std::process::ExitCode;

fn main() -> ExitCode {
    match linkharvest_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("linkharvest: {}", e);
            ExitCode::FAILURE
        }
    }
}
