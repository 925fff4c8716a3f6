use std::process::ExitCode;

use calendar_tree::{CalendarError, logging, read_config, run};

fn main() -> ExitCode {
    logging::init();

    match read_config().and_then(|config| run(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(CalendarError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
