use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;

/// Requires each changed chart to bump its own `Chart.yaml`.
///
/// Must run after the chart directory and version bump rules.
pub struct PairedBumpRule;

impl VerificationRule for PairedBumpRule {
    fn check(&self, _context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        result.unpaired_charts = result
            .chart_dirs
            .iter()
            .filter(|dir| dir.is_chart_root())
            .filter(|dir| {
                let manifest = dir.manifest_path();
                !result.bumped_manifests.iter().any(|bumped| *bumped == manifest)
            })
            .cloned()
            .collect();
        Ok(())
    }
}
