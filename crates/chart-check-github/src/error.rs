use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub token is empty")]
    EmptyToken,

    #[error("GitHub token contains characters that cannot be sent in an HTTP header")]
    InvalidToken,

    #[error("invalid GitHub API URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to '{url}' failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API returned HTTP {status} for '{url}'{}", api_message_suffix(.message))]
    Status {
        url: String,
        status: u16,
        message: Option<String>,
    },

    #[error("failed to decode response from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

fn api_message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}
