use sumcheck_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout is reserved for the report.
    if let Err(err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {:#}", err),
            Err(stderr_err) => eprintln!("sumcheck: logging disabled: {:#}", stderr_err),
        }
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("sumcheck error: {:#}", err);
        std::process::exit(1);
    }
}
