use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One file touched by a pull request.
///
/// `patch` is absent when the hosting service omits the diff, which happens
/// for binary files and for diffs that are too large to inline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangedFileRecord {
    pub filename: String,
    #[serde(default)]
    pub patch: Option<String>,
}

impl ChangedFileRecord {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            patch: None,
        }
    }

    #[must_use]
    pub fn with_patch(mut self, patch: impl Into<String>) -> Self {
        self.patch = Some(patch.into());
        self
    }
}

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    owner: String,
    name: String,
}

impl RepositorySlug {
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositorySlug {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CoreError::InvalidRepository {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| invalid("expected 'owner/name'"))?;

        if owner.is_empty() {
            return Err(invalid("owner is empty"));
        }
        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.contains('/') {
            return Err(invalid("expected exactly one '/'"));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The top two path segments of a directory holding changed chart files,
/// e.g. `charts/my-service`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChartDirectory(String);

impl ChartDirectory {
    /// Truncates `dir` to its first two `/`-separated segments.
    #[must_use]
    pub fn from_dir(dir: &str) -> Self {
        let segments: Vec<&str> = dir.split('/').take(2).collect();
        Self(segments.join("/"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the normalized directory itself still names a charts tree.
    ///
    /// A file under `deploy/app/charts/x` normalizes to `deploy/app`, which is
    /// listed but not counted as a changed chart.
    #[must_use]
    pub fn is_chart_root(&self) -> bool {
        self.0.contains("charts")
    }

    /// Path of the manifest expected to carry this chart's version bump.
    #[must_use]
    pub fn manifest_path(&self) -> String {
        format!("{}/Chart.yaml", self.0)
    }
}

impl fmt::Display for ChartDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of comparing changed chart directories against version bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No chart changed and no version was bumped.
    NoChangeDetected,
    /// Every changed chart is matched by a version bump.
    Balanced,
    /// The number of changed charts differs from the number of bumps.
    Mismatched,
}

impl Verdict {
    #[must_use]
    pub fn evaluate(chart_dir_count: usize, version_bump_count: usize) -> Self {
        if chart_dir_count == 0 && version_bump_count == 0 {
            Self::NoChangeDetected
        } else if chart_dir_count == version_bump_count {
            Self::Balanced
        } else {
            Self::Mismatched
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoChangeDetected => "no-change",
            Self::Balanced => "balanced",
            Self::Mismatched => "mismatched",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
