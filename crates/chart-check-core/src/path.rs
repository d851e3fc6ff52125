/// Substrings excluding matching paths from chart and version bump checks.
///
/// A path is ignored when any entry occurs anywhere inside it, so `legacy`
/// excludes both `charts/legacy` and `charts/legacy-api/templates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePaths(Vec<String>);

impl IgnorePaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from raw entries, trimming each one and dropping blanks.
    ///
    /// A blank entry would be a substring of every path.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|entry| entry.as_ref().trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        )
    }

    /// Builds the list from newline separated input.
    #[must_use]
    pub fn from_multiline(input: &str) -> Self {
        Self::from_entries(input.lines())
    }

    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        self.0.iter().any(|entry| path.contains(entry.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Parent directory of a repository-relative `/`-separated path.
///
/// Files at the repository root have parent `.`.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    let path = path.trim_end_matches('/');
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}
