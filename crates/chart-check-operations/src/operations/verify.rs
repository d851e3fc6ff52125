use chart_check_core::{IgnorePaths, RepositorySlug, Verdict};
use tracing::{debug, info};

use super::list_changed_files;
use crate::Result;
use crate::traits::PullRequestFileLister;
use crate::verification::rules::{ChartDirectoryRule, PairedBumpRule, VersionBumpRule};
use crate::verification::{VerificationContext, VerificationEngine, VerificationResult};

pub struct VerifyInput {
    pub repository: RepositorySlug,
    pub pull_number: u64,
    pub ignore_paths: IgnorePaths,
    /// Require every changed chart to bump its own manifest instead of only
    /// comparing totals.
    pub strict_pairing: bool,
}

#[derive(Debug)]
pub enum VerifyOutcome {
    NoChanges(VerificationResult),
    Success(VerificationResult),
    Failed(VerificationResult),
}

impl VerifyOutcome {
    #[must_use]
    pub fn result(&self) -> &VerificationResult {
        match self {
            Self::NoChanges(result) | Self::Success(result) | Self::Failed(result) => result,
        }
    }
}

pub struct VerifyOperation<L> {
    lister: L,
}

impl<L> VerifyOperation<L>
where
    L: PullRequestFileLister,
{
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    /// # Errors
    ///
    /// Returns an error if the pull request files cannot be listed.
    pub async fn execute(&self, input: &VerifyInput) -> Result<VerifyOutcome> {
        let records = list_changed_files(&self.lister, &input.repository, input.pull_number).await?;
        info!(
            repository = %input.repository,
            pull_number = input.pull_number,
            files = records.len(),
            "fetched pull request files"
        );

        let context = VerificationContext {
            records,
            ignore_paths: input.ignore_paths.clone(),
        };

        let chart_rule = ChartDirectoryRule;
        let bump_rule = VersionBumpRule;
        let pairing_rule = PairedBumpRule;

        let mut engine = VerificationEngine::new();
        engine.add_rule(&chart_rule);
        engine.add_rule(&bump_rule);
        if input.strict_pairing {
            engine.add_rule(&pairing_rule);
        }

        let result = engine.verify(&context)?;
        let verdict = result.verdict();
        debug!(
            charts = result.chart_dir_count(),
            bumps = result.version_bump_count(),
            %verdict,
            "evaluated pull request"
        );

        Ok(match verdict {
            Verdict::NoChangeDetected => VerifyOutcome::NoChanges(result),
            Verdict::Balanced => VerifyOutcome::Success(result),
            Verdict::Mismatched => VerifyOutcome::Failed(result),
        })
    }
}
