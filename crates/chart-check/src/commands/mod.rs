pub(crate) mod verify;

use chart_check_github::DEFAULT_API_URL;
use clap::Args;
use clap::builder::BoolishValueParser;

#[derive(Args)]
pub(crate) struct VerifyArgs {
    /// Repository to check, in owner/name form
    #[arg(long = "repo", env = "INPUT_REPONAME", value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(long = "pr", env = "INPUT_PRNUMBER", value_name = "NUMBER")]
    pub pr: Option<String>,

    /// Exclude paths containing this substring (repeatable; newline separated in the environment)
    #[arg(
        long = "ignore-path",
        env = "INPUT_IGNOREPATHS",
        value_delimiter = '\n',
        value_name = "SUBSTRING"
    )]
    pub ignore_paths: Vec<String>,

    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Abort a request to the GitHub API after this many seconds
    #[arg(long = "timeout-secs", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Require each changed chart to bump its own Chart.yaml
    ///
    /// The environment value accepts true/false, yes/no, on/off and 1/0.
    #[arg(
        long = "strict-pairing",
        env = "INPUT_STRICTPAIRING",
        value_parser = BoolishValueParser::new()
    )]
    pub strict_pairing: bool,

    /// Suppress the report and the policy failure message
    #[arg(long, short)]
    pub quiet: bool,
}
