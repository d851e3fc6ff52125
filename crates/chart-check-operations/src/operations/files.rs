use chart_check_core::{ChangedFileRecord, RepositorySlug};
use tracing::debug;

use crate::traits::PullRequestFileLister;
use crate::{OperationError, Result};

pub const PAGE_SIZE: u32 = 100;

/// Upper bound on pages requested before giving up on a listing that never
/// returns an empty page.
pub const MAX_PAGES: u32 = 1000;

/// Collects every changed file of a pull request, requesting pages in order
/// until the lister returns an empty one.
///
/// # Errors
///
/// Returns the first error reported by the lister; records fetched before it
/// are discarded. Returns [`OperationError::PageLimitExceeded`] if
/// [`MAX_PAGES`] non-empty pages were returned.
pub async fn list_changed_files<L>(
    lister: &L,
    repository: &RepositorySlug,
    pull_number: u64,
) -> Result<Vec<ChangedFileRecord>>
where
    L: PullRequestFileLister + ?Sized,
{
    let mut records = Vec::new();

    for page in 1..=MAX_PAGES {
        let batch = lister
            .list_files_page(repository, pull_number, PAGE_SIZE, page)
            .await?;
        debug!(%repository, pull_number, page, count = batch.len(), "listed pull request files");

        if batch.is_empty() {
            return Ok(records);
        }
        records.extend(batch);
    }

    Err(OperationError::PageLimitExceeded { pages: MAX_PAGES })
}

#[cfg(test)]
mod tests {
    use chart_check_core::ChangedFileRecord;

    use super::*;
    use crate::mocks::MockFileLister;

    fn slug() -> RepositorySlug {
        "acme/charts".parse().expect("valid slug")
    }

    fn records(count: usize) -> Vec<ChangedFileRecord> {
        (0..count)
            .map(|i| ChangedFileRecord::new(format!("charts/c{i}/values.yaml")))
            .collect()
    }

    #[tokio::test]
    async fn full_page_then_empty_page_stops_after_two_requests() -> anyhow::Result<()> {
        let lister = MockFileLister::new().with_records(records(100));

        let listed = list_changed_files(&lister, &slug(), 5).await?;

        assert_eq!(listed.len(), 100);
        assert_eq!(lister.requested_pages(), vec![1, 2]);
        Ok(())
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() -> anyhow::Result<()> {
        let lister = MockFileLister::new().with_records(records(250));

        let listed = list_changed_files(&lister, &slug(), 5).await?;

        assert_eq!(listed.len(), 250);
        assert_eq!(listed[0].filename, "charts/c0/values.yaml");
        assert_eq!(listed[249].filename, "charts/c249/values.yaml");
        assert_eq!(lister.requested_pages(), vec![1, 2, 3, 4]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_pull_request_makes_one_request() -> anyhow::Result<()> {
        let lister = MockFileLister::new();

        let listed = list_changed_files(&lister, &slug(), 5).await?;

        assert!(listed.is_empty());
        assert_eq!(lister.requested_pages(), vec![1]);
        Ok(())
    }

    #[tokio::test]
    async fn failure_on_later_page_aborts_without_partial_result() {
        let lister = MockFileLister::new()
            .with_records(records(150))
            .failing_on_page(2);

        let result = list_changed_files(&lister, &slug(), 5).await;

        assert!(matches!(result, Err(OperationError::GitHub(_))));
        assert_eq!(lister.requested_pages(), vec![1, 2]);
    }

    #[tokio::test]
    async fn lister_that_never_ends_hits_page_limit() {
        let lister = MockFileLister::new().never_ending();

        let result = list_changed_files(&lister, &slug(), 5).await;

        assert!(matches!(
            result,
            Err(OperationError::PageLimitExceeded { pages: MAX_PAGES })
        ));
    }
}
