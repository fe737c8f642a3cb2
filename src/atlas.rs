//! Functions for loading volumetric brain parcellations.
//!
//! A parcellation (or atlas) is a labeled 3-D volume: each voxel holds an
//! integer label identifying the brain region the voxel belongs to, with
//! label 0 reserved for background voxels outside the brain.

use ndarray::Array3;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::nifti::{read_nifti, NiftiHeader};

/// Models a volumetric brain parcellation: a 3-D array of integer region
/// labels plus the spatial metadata of the NIfTI file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledVolume {
    pub header: NiftiHeader,
    pub labels: Array3<i32>,
}

impl LabeledVolume {

    /// Read a parcellation from a NIfTI volume file.
    ///
    /// Atlases are frequently stored with a floating-point datatype even
    /// though they hold integer labels, so voxel values are rounded to the
    /// nearest integer.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<LabeledVolume> {
        let (header, data) = read_nifti(path)?;
        let labels = data.mapv(|v| v.round() as i32);
        Ok(LabeledVolume { header, labels })
    }

    /// Get the set of distinct labels present in the volume, including the
    /// background label 0 if any background voxel exists.
    pub fn distinct_labels(&self) -> BTreeSet<i32> {
        self.labels.iter().copied().collect()
    }

    /// Get the number of regions in the parcellation, i.e. the number of
    /// distinct nonzero labels.
    pub fn num_rois(&self) -> usize {
        self.distinct_labels().iter().filter(|&&l| l != 0).count()
    }
}

impl fmt::Display for LabeledVolume {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (d1, d2, d3) = self.labels.dim();
        write!(f, "Parcellation of shape {}x{}x{} with {} regions.", d1, d2, d3, self.num_rois())
    }
}


/// Read a brain parcellation from a NIfTI volume file.
///
/// # Examples
///
/// ```no_run
/// let atlas = marker2nii::load_atlas("/path/to/schaefer100.nii.gz").unwrap();
/// println!("Atlas has {} regions.", atlas.num_rois());
/// ```
pub fn load_atlas<P: AsRef<Path>>(path: P) -> Result<LabeledVolume> {
    LabeledVolume::from_file(path)
}
