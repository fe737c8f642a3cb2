//! Output directory handling for one marker2nii run.

use std::fs::create_dir;
use std::path::{Path, PathBuf};

use crate::error::{Marker2NiiError, Result};
use crate::util::file_base_name;

/// Prepare the output directory for one run.
///
/// `out_folder` must be an existing directory. Inside it, a subdirectory
/// named after the marker file's base name (extension stripped) is created
/// if it does not exist yet, and all output volumes of the run go there.
/// Returns the path of that subdirectory.
pub fn prepare_output<P: AsRef<Path>, Q: AsRef<Path>>(out_folder: P, marker_file: Q) -> Result<PathBuf> {
    let out_folder = out_folder.as_ref();
    if !out_folder.is_dir() {
        return Err(Marker2NiiError::OutputDirDoesNotExist(
            out_folder.to_string_lossy().into_owned(),
        ));
    }

    let run_dir = out_folder.join(file_base_name(marker_file));
    if !run_dir.is_dir() {
        create_dir(&run_dir)?;
    }
    Ok(run_dir)
}
