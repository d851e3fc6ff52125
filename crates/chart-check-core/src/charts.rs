use std::collections::BTreeSet;

use crate::path::{IgnorePaths, parent_dir};
use crate::types::{ChangedFileRecord, ChartDirectory};

const CHARTS_MARKER: &str = "charts";
const MANIFEST_SUFFIX: &str = "Chart.yaml";
const VERSION_ADDITION: &str = "+version";

/// Collects the chart directories touched by `filenames`, sorted and deduplicated.
///
/// A file contributes when its parent directory contains `charts` and is not
/// ignored; the parent is then cut down to its first two segments.
pub fn derive_chart_directories<'a, I>(
    filenames: I,
    ignore_paths: &IgnorePaths,
) -> BTreeSet<ChartDirectory>
where
    I: IntoIterator<Item = &'a str>,
{
    filenames
        .into_iter()
        .map(parent_dir)
        .filter(|dir| dir.contains(CHARTS_MARKER) && !ignore_paths.is_ignored(dir))
        .map(ChartDirectory::from_dir)
        .collect()
}

/// Whether `record` is a chart manifest whose diff adds a `version` line.
///
/// This is a textual check on the patch; records without a patch never match.
#[must_use]
pub fn is_version_bump(record: &ChangedFileRecord) -> bool {
    record.filename.ends_with(MANIFEST_SUFFIX)
        && record
            .patch
            .as_deref()
            .is_some_and(|patch| patch.contains(VERSION_ADDITION))
}

/// Filenames of the non-ignored manifests carrying a version bump, in input order.
pub fn bumped_manifests<'a>(
    records: &'a [ChangedFileRecord],
    ignore_paths: &IgnorePaths,
) -> Vec<&'a str> {
    records
        .iter()
        .filter(|record| !ignore_paths.is_ignored(&record.filename))
        .filter(|record| is_version_bump(record))
        .map(|record| record.filename.as_str())
        .collect()
}

#[must_use]
pub fn count_version_bumps(records: &[ChangedFileRecord], ignore_paths: &IgnorePaths) -> usize {
    bumped_manifests(records, ignore_paths).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(filenames: &[&str], ignore: &IgnorePaths) -> Vec<String> {
        derive_chart_directories(filenames.iter().copied(), ignore)
            .into_iter()
            .map(|dir| dir.as_str().to_string())
            .collect()
    }

    mod derive_chart_directories {
        use super::*;

        #[test]
        fn normalizes_to_two_segments_and_deduplicates() {
            let result = dirs(
                &[
                    "charts/foo/Chart.yaml",
                    "charts/foo/templates/x.yaml",
                    "charts/foo/templates/nested/y.yaml",
                ],
                &IgnorePaths::new(),
            );

            assert_eq!(result, vec!["charts/foo"]);
        }

        #[test]
        fn output_is_sorted() {
            let result = dirs(
                &["charts/zeta/values.yaml", "charts/alpha/values.yaml", "charts/mid/a.yaml"],
                &IgnorePaths::new(),
            );

            assert_eq!(result, vec!["charts/alpha", "charts/mid", "charts/zeta"]);
        }

        #[test]
        fn same_input_gives_same_output() {
            let files = ["charts/b/x.yaml", "charts/a/y.yaml", "charts/b/z.yaml"];
            let ignore = IgnorePaths::from_entries(["charts/c"]);

            assert_eq!(dirs(&files, &ignore), dirs(&files, &ignore));
        }

        #[test]
        fn skips_files_outside_charts() {
            let result = dirs(
                &["docs/README.md", "src/main.rs", "Chart.yaml"],
                &IgnorePaths::new(),
            );

            assert!(result.is_empty());
        }

        #[test]
        fn file_directly_in_charts_root_normalizes_to_charts() {
            let result = dirs(&["charts/README.md"], &IgnorePaths::new());

            assert_eq!(result, vec!["charts"]);
        }

        #[test]
        fn ignored_directories_are_excluded() {
            let ignore = IgnorePaths::from_entries(["charts/legacy"]);

            let result = dirs(
                &[
                    "charts/legacy/Chart.yaml",
                    "charts/legacy/templates/a.yaml",
                    "charts/foo/values.yaml",
                ],
                &ignore,
            );

            assert_eq!(result, vec!["charts/foo"]);
        }

        #[test]
        fn ignore_matches_against_full_parent_directory() {
            let ignore = IgnorePaths::from_entries(["templates"]);

            let result = dirs(&["charts/foo/templates/x.yaml", "charts/bar/values.yaml"], &ignore);

            assert_eq!(result, vec!["charts/bar"]);
        }
    }

    mod version_bumps {
        use super::*;

        #[test]
        fn counts_chart_yaml_with_added_version_line() {
            let records = vec![
                ChangedFileRecord::new("charts/foo/Chart.yaml")
                    .with_patch("-version: 1.1.0\n+version: 1.2.0"),
                ChangedFileRecord::new("charts/foo/templates/x.yaml")
                    .with_patch("+version: not a manifest"),
            ];

            assert_eq!(count_version_bumps(&records, &IgnorePaths::new()), 1);
        }

        #[test]
        fn manifest_without_version_addition_is_not_a_bump() {
            let records = vec![
                ChangedFileRecord::new("charts/foo/Chart.yaml")
                    .with_patch("+appVersion: 2.0.0\n-appVersion: 1.0.0"),
            ];

            assert_eq!(count_version_bumps(&records, &IgnorePaths::new()), 0);
        }

        #[test]
        fn missing_patch_is_not_a_bump() {
            let record = ChangedFileRecord::new("charts/foo/Chart.yaml");

            assert!(!is_version_bump(&record));
        }

        #[test]
        fn ignored_manifest_is_not_counted() {
            let records =
                vec![ChangedFileRecord::new("charts/foo/Chart.yaml").with_patch("+version: 1.2.0")];
            let ignore = IgnorePaths::from_entries(["charts/foo"]);

            assert_eq!(count_version_bumps(&records, &ignore), 0);
        }

        #[test]
        fn bumped_manifests_keep_input_order() {
            let records = vec![
                ChangedFileRecord::new("charts/zeta/Chart.yaml").with_patch("+version: 0.2.0"),
                ChangedFileRecord::new("charts/alpha/Chart.yaml").with_patch("+version: 0.3.0"),
            ];

            let bumped = bumped_manifests(&records, &IgnorePaths::new());

            assert_eq!(bumped, vec!["charts/zeta/Chart.yaml", "charts/alpha/Chart.yaml"]);
        }
    }
}
