use chart_check_core::IgnorePaths;
use chart_check_operations::verification::VerificationResult;

pub(crate) trait OutputFormatter {
    fn format_ignore_paths(&self, ignore_paths: &IgnorePaths) -> String;
    fn format_report(&self, result: &VerificationResult) -> String;
    fn format_no_changes(&self) -> String;
    fn format_success(&self) -> String;
    fn format_failure(&self, result: &VerificationResult) -> String;
}
