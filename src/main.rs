use std::process::ExitCode;

fn main() -> ExitCode {
    match life_fit::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lf: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
