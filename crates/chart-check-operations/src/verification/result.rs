use std::collections::BTreeSet;

use chart_check_core::{ChartDirectory, Verdict};

#[derive(Debug, Default)]
pub struct VerificationResult {
    /// Every filename in the pull request, in listing order.
    pub files_changed: Vec<String>,
    pub chart_dirs: BTreeSet<ChartDirectory>,
    /// Manifests whose patch adds a `version` line.
    pub bumped_manifests: Vec<String>,
    /// Changed charts without a bump of their own manifest. Only filled when
    /// pairing is checked.
    pub unpaired_charts: Vec<ChartDirectory>,
}

impl VerificationResult {
    #[must_use]
    pub fn chart_dir_count(&self) -> usize {
        self.chart_dirs
            .iter()
            .filter(|dir| dir.is_chart_root())
            .count()
    }

    #[must_use]
    pub fn version_bump_count(&self) -> usize {
        self.bumped_manifests.len()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match Verdict::evaluate(self.chart_dir_count(), self.version_bump_count()) {
            Verdict::Balanced if !self.unpaired_charts.is_empty() => Verdict::Mismatched,
            verdict => verdict,
        }
    }
}
