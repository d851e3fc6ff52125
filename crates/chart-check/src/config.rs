use std::fmt;
use std::time::Duration;

use chart_check_core::{IgnorePaths, RepositorySlug};
use chart_check_operations::operations::VerifyInput;

use crate::commands::VerifyArgs;
use crate::error::{CliError, Result};

/// Inputs of one check run, resolved from flags and the CI environment.
pub(crate) struct CheckConfig {
    pub repository: RepositorySlug,
    pub pull_number: u64,
    pub ignore_paths: IgnorePaths,
    pub token: String,
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub strict_pairing: bool,
}

impl CheckConfig {
    pub fn from_args(args: &VerifyArgs) -> Result<Self> {
        let repo = required(args.repo.as_deref(), "repoName", "repo", "INPUT_REPONAME")?;
        let pr = required(args.pr.as_deref(), "prNumber", "pr", "INPUT_PRNUMBER")?;
        let token = required(args.token.as_deref(), "token", "token", "GITHUB_TOKEN")?;

        Ok(Self {
            repository: repo.parse()?,
            pull_number: parse_pull_number(pr)?,
            ignore_paths: IgnorePaths::from_entries(&args.ignore_paths),
            token: token.to_string(),
            api_url: args.api_url.clone(),
            timeout: args.timeout_secs.map(Duration::from_secs),
            strict_pairing: args.strict_pairing,
        })
    }

    pub fn verify_input(&self) -> VerifyInput {
        VerifyInput {
            repository: self.repository.clone(),
            pull_number: self.pull_number,
            ignore_paths: self.ignore_paths.clone(),
            strict_pairing: self.strict_pairing,
        }
    }
}

impl fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConfig")
            .field("repository", &self.repository)
            .field("pull_number", &self.pull_number)
            .field("ignore_paths", &self.ignore_paths)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("strict_pairing", &self.strict_pairing)
            .finish()
    }
}

fn required<'a>(
    value: Option<&'a str>,
    name: &'static str,
    flag: &'static str,
    env: &'static str,
) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CliError::MissingInput { name, flag, env })
}

fn parse_pull_number(value: &str) -> Result<u64> {
    let number = value
        .trim()
        .trim_start_matches('#')
        .parse::<u64>()
        .map_err(|source| CliError::InvalidPullRequestNumber {
            value: value.to_string(),
            source,
        })?;
    if number == 0 {
        return Err(CliError::ZeroPullRequestNumber);
    }
    Ok(number)
}
