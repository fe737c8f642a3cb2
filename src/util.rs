//! Utility functions used in all other marker2nii modules.

use std::path::Path;

/// Check whether the file extension ends with ".gz".
pub fn is_gz_file<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false)
}


/// Get the base name of a file, with the final extension stripped.
///
/// Used to name the single marker of a plain-text file and the per-run
/// output subdirectory.
pub fn file_base_name<P>(path: P) -> String
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_stem()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_default()
}
