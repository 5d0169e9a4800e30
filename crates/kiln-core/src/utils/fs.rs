use std::env::consts::EXE_SUFFIX;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the regular files directly inside `path`, sorted by path.
///
/// A missing path or a path that is not a directory yields an empty list.
pub fn files_in_dir<P: AsRef<Path>>(path: P) -> io::Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let mut result = Vec::new();

    if !path.is_dir() {
        return Ok(result);
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();

        // Follows symlinks so linked plugin binaries are found too
        if entry_path.is_file() {
            result.push(entry_path);
        }
    }

    result.sort();
    Ok(result)
}

/// Strip the platform executable suffix (`.exe` on Windows) from a file name
pub fn strip_exe_suffix(file_name: &str) -> &str {
    strip_suffix_ignore_case(file_name, EXE_SUFFIX)
}

pub(crate) fn strip_suffix_ignore_case<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || file_name.len() < suffix.len() {
        return file_name;
    }
    let split = file_name.len() - suffix.len();
    match (file_name.get(..split), file_name.get(split..)) {
        (Some(stem), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => stem,
        _ => file_name,
    }
}
