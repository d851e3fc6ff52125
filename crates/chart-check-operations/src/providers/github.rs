use async_trait::async_trait;
use chart_check_core::{ChangedFileRecord, RepositorySlug};
use chart_check_github::Client;

use crate::Result;
use crate::traits::PullRequestFileLister;

pub struct GitHubFileLister {
    client: Client,
}

impl GitHubFileLister {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestFileLister for GitHubFileLister {
    async fn list_files_page(
        &self,
        repository: &RepositorySlug,
        pull_number: u64,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<ChangedFileRecord>> {
        Ok(self
            .client
            .list_pull_request_files_page(repository, pull_number, per_page, page)
            .await?)
    }
}
