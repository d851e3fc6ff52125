mod files;
mod verify;

pub use files::{MAX_PAGES, PAGE_SIZE, list_changed_files};
pub use verify::{VerifyInput, VerifyOperation, VerifyOutcome};
