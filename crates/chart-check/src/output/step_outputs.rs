use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chart_check_operations::verification::VerificationResult;

use crate::error::{CliError, Result};

fn render(result: &VerificationResult) -> serde_json::Result<String> {
    Ok(format!(
        "charts_dirs_changed={}\nnum_charts_changed={}\nnum_version_bumps={}\nverdict={}\n",
        serde_json::to_string(&result.chart_dirs)?,
        result.chart_dir_count(),
        result.version_bump_count(),
        result.verdict(),
    ))
}

/// Appends the check's step outputs in `name=value` form to the file the CI
/// runner reads them from.
pub(crate) fn append_step_outputs(path: &Path, result: &VerificationResult) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let content = render(result)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())
    };

    write().map_err(|source| CliError::StepOutput {
        path: path.to_path_buf(),
        source,
    })
}
