use chart_check_core::{ChangedFileRecord, IgnorePaths};

pub struct VerificationContext {
    pub records: Vec<ChangedFileRecord>,
    pub ignore_paths: IgnorePaths,
}

impl VerificationContext {
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.filename.as_str())
    }
}
