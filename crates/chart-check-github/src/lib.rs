mod client;
mod error;

pub use client::{Client, ClientBuilder, DEFAULT_API_URL};
pub use error::GitHubError;

pub type Result<T> = std::result::Result<T, GitHubError>;
