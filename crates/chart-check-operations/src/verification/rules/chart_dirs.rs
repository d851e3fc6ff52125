use chart_check_core::derive_chart_directories;
use tracing::debug;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;

pub struct ChartDirectoryRule;

impl VerificationRule for ChartDirectoryRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        result.chart_dirs = derive_chart_directories(context.filenames(), &context.ignore_paths);
        debug!(count = result.chart_dirs.len(), "derived chart directories");
        Ok(())
    }
}
