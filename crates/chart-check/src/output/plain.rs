use chart_check_core::IgnorePaths;
use chart_check_operations::verification::VerificationResult;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_list<'a>(output: &mut String, title: &str, items: impl IntoIterator<Item = &'a str>) {
        output.push_str(&format!("{title}:\n"));
        let mut empty = true;
        for item in items {
            empty = false;
            output.push_str(&format!("  {item}\n"));
        }
        if empty {
            output.push_str("  (none)\n");
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_ignore_paths(&self, ignore_paths: &IgnorePaths) -> String {
        let mut output = String::new();
        Self::format_list(&mut output, "Ignore paths", ignore_paths.iter());
        output
    }

    fn format_report(&self, result: &VerificationResult) -> String {
        let mut output = String::new();
        Self::format_list(
            &mut output,
            "Files changed",
            result.files_changed.iter().map(String::as_str),
        );
        Self::format_list(
            &mut output,
            "Chart directories changed",
            result.chart_dirs.iter().map(|dir| dir.as_str()),
        );
        Self::format_list(
            &mut output,
            "Version bumps",
            result.bumped_manifests.iter().map(String::as_str),
        );
        output.push_str(&format!("Num charts changed: {}\n", result.chart_dir_count()));
        output.push_str(&format!("Num version bumps: {}\n", result.version_bump_count()));
        output
    }

    fn format_no_changes(&self) -> String {
        "\nNo charts were changed and no version bumps were found\n".to_string()
    }

    fn format_success(&self) -> String {
        "\nCharts were changed and version bumps were found. All good!\n".to_string()
    }

    fn format_failure(&self, result: &VerificationResult) -> String {
        let mut output = String::new();

        if !result.unpaired_charts.is_empty() {
            output.push_str("\nCharts without a version bump in their own Chart.yaml:\n");
            for dir in &result.unpaired_charts {
                output.push_str(&format!("  {dir}\n"));
            }
        }

        output.push_str("\nBump the `version` field in Chart.yaml of every changed chart\n");
        output
    }
}
