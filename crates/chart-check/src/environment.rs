use std::path::PathBuf;

const STEP_OUTPUT_VAR: &str = "GITHUB_OUTPUT";
const GITHUB_ACTIONS_VAR: &str = "GITHUB_ACTIONS";

/// File the runner collects step outputs from, if the check runs as a
/// workflow step.
pub fn step_output_path() -> Option<PathBuf> {
    std::env::var_os(STEP_OUTPUT_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn is_github_actions() -> bool {
    std::env::var(GITHUB_ACTIONS_VAR).is_ok_and(|value| value == "true")
}
