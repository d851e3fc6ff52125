mod chart_dirs;
mod pairing;
mod version_bumps;

pub use chart_dirs::ChartDirectoryRule;
pub use pairing::PairedBumpRule;
pub use version_bumps::VersionBumpRule;

use super::{VerificationContext, VerificationResult};
use crate::Result;

pub trait VerificationRule {
    /// # Errors
    ///
    /// Returns an error if the rule check cannot be completed.
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()>;
}
