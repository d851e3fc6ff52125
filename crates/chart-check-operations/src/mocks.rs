use std::sync::Mutex;

use async_trait::async_trait;
use chart_check_core::{ChangedFileRecord, RepositorySlug};
use chart_check_github::GitHubError;

use crate::Result;
use crate::operations::PAGE_SIZE;
use crate::traits::PullRequestFileLister;

/// In-memory lister serving records in pages and recording which pages were
/// requested.
pub struct MockFileLister {
    records: Vec<ChangedFileRecord>,
    failing_page: Option<u32>,
    never_ending: bool,
    requested: Mutex<Vec<u32>>,
}

impl MockFileLister {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failing_page: None,
            never_ending: false,
            requested: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_records(mut self, records: Vec<ChangedFileRecord>) -> Self {
        self.records = records;
        self
    }

    #[must_use]
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    /// Every page returns one record, so the listing never terminates.
    #[must_use]
    pub fn never_ending(mut self) -> Self {
        self.never_ending = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockFileLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PullRequestFileLister for MockFileLister {
    async fn list_files_page(
        &self,
        _repository: &RepositorySlug,
        _pull_number: u64,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<ChangedFileRecord>> {
        assert_eq!(per_page, PAGE_SIZE);
        self.requested.lock().expect("lock poisoned").push(page);

        if self.failing_page == Some(page) {
            return Err(GitHubError::Status {
                url: format!("mock://pulls/files?page={page}"),
                status: 500,
                message: Some("mock failure".to_string()),
            }
            .into());
        }

        if self.never_ending {
            return Ok(vec![ChangedFileRecord::new(format!("charts/p{page}/values.yaml"))]);
        }

        let per_page = per_page as usize;
        let start = (page as usize - 1) * per_page;
        Ok(self
            .records
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect())
    }
}
