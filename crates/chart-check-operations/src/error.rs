use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to list pull request files")]
    GitHub(#[from] chart_check_github::GitHubError),

    #[error("pull request file listing did not end after {pages} pages")]
    PageLimitExceeded { pages: u32 },
}

pub type Result<T> = std::result::Result<T, OperationError>;
