mod app;
mod cli;
mod prelude;
mod report;
mod router;

use std::process::ExitCode;

use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use prelude::*;

const LOG_ENV: &str = "AZURE_OPENAI_LIMITS_LOG";

fn main() -> ExitCode {
    let cli = Cli::new();
    let verbose = cli.verbose;

    init_logging(verbose);

    match run(cli) {
        Ok(output) => {
            println!("{output}");

            ExitCode::SUCCESS
        }

        // Never hand a raw fault back to the shell: a short message on stderr, status 1.
        Err(report) => {
            match report.downcast_ref::<azure_openai_limits::Error>() {
                Some(e) => {
                    eprintln!("Error: {e}");

                    if let Some(help) = e.help().filter(|_| verbose) {
                        eprintln!("  help: {help}");
                    }
                }
                None => eprintln!("Unexpected error: {report}"),
            }

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    let unformatted = cli.unformatted;
    let ctx = App::new(cli)?;

    let report = router::dispatch(&ctx)?;

    report.render(unformatted)
}

// private

/// Stderr only, so stdout stays parseable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
