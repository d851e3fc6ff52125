use chart_check_github::Client;
use chart_check_operations::operations::{VerifyOperation, VerifyOutcome};
use chart_check_operations::providers::GitHubFileLister;
use tracing::debug;

use super::VerifyArgs;
use crate::config::CheckConfig;
use crate::environment;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter, append_step_outputs};

pub(crate) async fn run(args: VerifyArgs) -> Result<()> {
    let config = CheckConfig::from_args(&args)?;
    debug!(
        repository = %config.repository,
        pull_number = config.pull_number,
        ignore_paths = config.ignore_paths.len(),
        "resolved configuration"
    );

    let mut builder = Client::builder(config.token.as_str()).api_url(config.api_url.as_str());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let operation = VerifyOperation::new(GitHubFileLister::new(builder.build()?));

    let formatter = PlainTextFormatter;

    if !args.quiet {
        println!("Checking if charts were changed and version bumps were found ...");
        print!("{}", formatter.format_ignore_paths(&config.ignore_paths));
    }

    let outcome = operation.execute(&config.verify_input()).await?;

    if !args.quiet {
        print!("{}", formatter.format_report(outcome.result()));
    }

    if let Some(path) = environment::step_output_path() {
        append_step_outputs(&path, outcome.result())?;
    }

    match outcome {
        VerifyOutcome::NoChanges(_) => {
            if !args.quiet {
                print!("{}", formatter.format_no_changes());
            }
            Ok(())
        }
        VerifyOutcome::Success(_) => {
            if !args.quiet {
                print!("{}", formatter.format_success());
            }
            Ok(())
        }
        VerifyOutcome::Failed(result) => {
            if !args.quiet {
                eprint!("{}", formatter.format_failure(&result));
            }
            Err(CliError::PolicyViolation {
                chart_dirs: result.chart_dir_count(),
                version_bumps: result.version_bump_count(),
            })
        }
    }
}
