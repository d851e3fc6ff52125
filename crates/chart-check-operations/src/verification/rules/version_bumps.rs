use chart_check_core::bumped_manifests;
use tracing::debug;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;

pub struct VersionBumpRule;

impl VerificationRule for VersionBumpRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        result.bumped_manifests = bumped_manifests(&context.records, &context.ignore_paths)
            .into_iter()
            .inspect(|manifest| debug!(manifest, "found version bump"))
            .map(str::to_string)
            .collect();
        Ok(())
    }
}
