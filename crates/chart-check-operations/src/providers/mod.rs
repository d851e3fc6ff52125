mod github;

pub use github::GitHubFileLister;
