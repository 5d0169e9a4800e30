//! Small filesystem helpers shared by plugin discovery.
pub mod fs;

pub use fs::{files_in_dir, strip_exe_suffix};
