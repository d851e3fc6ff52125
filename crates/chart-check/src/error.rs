use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("verification failed")]
    Operation(#[from] chart_check_operations::OperationError),

    #[error("invalid configuration")]
    Core(#[from] chart_check_core::CoreError),

    #[error("failed to configure GitHub client")]
    GitHub(#[from] chart_check_github::GitHubError),

    #[error("missing required input '{name}' (pass --{flag} or set {env})")]
    MissingInput {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("invalid pull request number '{value}'")]
    InvalidPullRequestNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("pull request number must be greater than zero")]
    ZeroPullRequestNumber,

    #[error("failed to write step outputs to '{path}'")]
    StepOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "number of charts changed ({chart_dirs}) does not match the number of version bumps ({version_bumps})"
    )]
    PolicyViolation {
        chart_dirs: usize,
        version_bumps: usize,
    },
}

impl CliError {
    /// Whether this error is the expected policy failure rather than a
    /// configuration or transport problem.
    #[must_use]
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::CliError;

    #[test]
    fn policy_violation_message_includes_both_counts() {
        let err = CliError::PolicyViolation {
            chart_dirs: 2,
            version_bumps: 1,
        };

        let msg = err.to_string();

        assert!(msg.contains("(2)"));
        assert!(msg.contains("(1)"));
        assert!(err.is_policy_violation());
    }

    #[test]
    fn missing_input_names_flag_and_env() {
        let err = CliError::MissingInput {
            name: "repoName",
            flag: "repo",
            env: "INPUT_REPONAME",
        };

        let msg = err.to_string();

        assert!(msg.contains("--repo"));
        assert!(msg.contains("INPUT_REPONAME"));
        assert!(!err.is_policy_violation());
    }

    #[test]
    fn operation_error_converts_via_from() {
        let op_err = chart_check_operations::OperationError::PageLimitExceeded { pages: 3 };

        let cli_err: CliError = op_err.into();

        assert!(matches!(cli_err, CliError::Operation(_)));
    }

    #[test]
    fn invalid_pull_request_number_has_source_chain() {
        let source = "abc".parse::<u64>().expect_err("not a number");
        let err = CliError::InvalidPullRequestNumber {
            value: "abc".to_string(),
            source,
        };

        assert!(err.to_string().contains("abc"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn core_error_has_source_chain() {
        let err: CliError = chart_check_core::CoreError::InvalidRepository {
            input: "x".to_string(),
            reason: "expected 'owner/name'",
        }
        .into();

        assert!(std::error::Error::source(&err).is_some());
    }
}
