mod charts;
pub mod error;
mod path;
pub mod types;

pub use charts::{bumped_manifests, count_version_bumps, derive_chart_directories, is_version_bump};
pub use error::*;
pub use path::{IgnorePaths, parent_dir};
pub use types::*;
