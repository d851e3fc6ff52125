mod commands;
mod config;
mod environment;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::VerifyArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "chart-check")]
#[command(bin_name = "chart-check")]
#[command(version)]
#[command(
    about = "Check that every chart changed by a pull request bumps its version",
    long_about = None
)]
struct Cli {
    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,

    #[command(flatten)]
    verify: VerifyArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    let quiet = cli.verify.quiet;
    if let Err(e) = commands::verify::run(cli.verify).await {
        if !(quiet && e.is_policy_violation()) {
            print_error(&e);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_error(error: &CliError) {
    if environment::is_github_actions() {
        eprintln!("::error::{error}");
    }
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
