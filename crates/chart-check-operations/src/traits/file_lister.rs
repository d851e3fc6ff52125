use async_trait::async_trait;
use chart_check_core::{ChangedFileRecord, RepositorySlug};

use crate::Result;

/// Source of the files changed by a pull request, one page at a time.
#[async_trait]
pub trait PullRequestFileLister: Send + Sync {
    /// Returns page `page` (1-based) of at most `per_page` records.
    /// An empty page signals the end of the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved.
    async fn list_files_page(
        &self,
        repository: &RepositorySlug,
        pull_number: u64,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<ChangedFileRecord>>;
}
