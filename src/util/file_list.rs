//! Input list construction with recursive directory expansion.
//!
//! Given a mixed list of file and directory paths, [`create_file_list`]
//! returns a flat `Vec<PathBuf>` of files to decode. Directories are walked
//! with [`walkdir`] and contribute only regular files carrying a mozLz4
//! extension (`.jsonlz4`, `.mozlz4`, `.baklz4`, `.mozlz4a`); paths given
//! directly are forwarded whatever their name.
//!
//! **Symlink handling**: `walkdir` runs with `follow_links(false)`, so symlink
//! entries inside a walked directory are skipped and cyclic links cannot loop.
//! Results from each walked directory are sorted so runs are reproducible.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::file::has_mozlz4_extension;

/// Expand `inputs` into the list of files to process.
///
/// - Non-directory inputs are forwarded unchanged, with no existence check.
/// - Directories are walked only when `recursive` is set; otherwise they are
///   forwarded and fail later when read, like any other bad path.
/// - A directory entry that cannot be read aborts the walk with its
///   `io::Error`.
pub fn create_file_list<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if recursive && input.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(input) {
                let entry = entry.map_err(|e| {
                    e.io_error()
                        .map(|io| io::Error::new(io.kind(), io.to_string()))
                        .unwrap_or_else(|| io::Error::other(e.to_string()))
                })?;
                if entry.file_type().is_file() && has_mozlz4_extension(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            result.extend(found);
        } else {
            result.push(input.to_path_buf());
        }
    }
    Ok(result)
}
