//! Functions for mapping per-region marker values onto a parcellation.
//!
//! The mapping is positional: the marker value at index `k - 1` is assigned
//! to every voxel carrying region label `k`. Background voxels (label 0)
//! and voxels whose region has a missing (NaN) marker value are set to a
//! sentinel value far below the data range, so viewers can distinguish them
//! from legitimate, possibly negative, marker values.

use ndarray::Array3;

use std::path::Path;

use crate::atlas::LabeledVolume;
use crate::error::{Marker2NiiError, Result};
use crate::nifti::{write_nifti, NiftiHeader, NIFTI1_DATA_START, NIFTI_TYPE_FLOAT32};

/// Offset below the smallest marker value used for the sentinel that masks
/// background and missing voxels. The masked value is
/// `cal_min - MASKED_VALUE_OFFSET`. The offset is a compatibility constant,
/// it matches what downstream viewers and scripts expect.
pub const MASKED_VALUE_OFFSET: f32 = 20000.0;

/// A marker mapped into the voxel grid of a parcellation.
///
/// The volume has the same shape and spatial header fields (and thus the
/// same affine) as the parcellation it was created from. The header's
/// `cal_min` and `cal_max` hold the true extrema of the marker data,
/// excluding the sentinel, so viewers auto-scale to the real data range.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedVolume {
    pub header: NiftiHeader,
    pub data: Array3<f32>,
}

impl MappedVolume {

    /// The sentinel value assigned to background and missing voxels.
    pub fn masked_value(&self) -> f32 {
        self.header.cal_min - MASKED_VALUE_OFFSET
    }

    /// Write this volume to a NIfTI file. If the path ends with ".gz" the
    /// output is GZip-compressed.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_nifti(path, &self.header, &self.data)
    }
}


/// Map the values of one marker to their volumetric locations in the atlas.
///
/// The marker vector must hold exactly one value per region of the atlas,
/// with the value at index `k - 1` belonging to region label `k`. The
/// nonzero labels of the atlas must therefore be contiguous and start at 1;
/// anything else would silently assign values to the wrong regions, so it
/// is rejected instead.
///
/// NaN marker values are allowed and end up masked in the output, but at
/// least one value must be non-missing, otherwise no data range exists.
///
/// # Examples
///
/// ```no_run
/// let atlas = marker2nii::load_atlas("/path/to/schaefer100.nii.gz").unwrap();
/// let values = vec![0.5_f32; 100];
/// let mapped = marker2nii::map_to_atlas("degree", &values, &atlas).unwrap();
/// mapped.to_file("/tmp/degree.nii.gz").unwrap();
/// ```
pub fn map_to_atlas(name: &str, values: &[f32], atlas: &LabeledVolume) -> Result<MappedVolume> {
    let labels = atlas.distinct_labels();
    let num_rois = labels.iter().filter(|&&l| l != 0).count();

    if num_rois != values.len() {
        return Err(Marker2NiiError::RoiCountMismatch(
            name.to_string(),
            values.len(),
            num_rois,
        ));
    }

    for (expected, &label) in (1..=num_rois as i32).zip(labels.iter().filter(|&&l| l != 0)) {
        if label != expected {
            return Err(Marker2NiiError::NonContiguousRoiLabels(label));
        }
    }

    let mut cal_min = f32::INFINITY;
    let mut cal_max = f32::NEG_INFINITY;
    for &v in values.iter().filter(|v| !v.is_nan()) {
        cal_min = cal_min.min(v);
        cal_max = cal_max.max(v);
    }
    if !cal_min.is_finite() {
        return Err(Marker2NiiError::AllMarkerValuesMissing(name.to_string()));
    }

    let masked = cal_min - MASKED_VALUE_OFFSET;
    let data = atlas.labels.mapv(|label| {
        if label == 0 {
            return masked;
        }
        let v = values[(label - 1) as usize];
        if v.is_nan() {
            masked
        } else {
            v
        }
    });

    let mut header = atlas.header.clone();
    header.dim[0] = 3;
    header.dim[4] = 1;
    header.datatype = NIFTI_TYPE_FLOAT32;
    header.bitpix = 32;
    header.vox_offset = NIFTI1_DATA_START as f32;
    header.scl_slope = 1.;
    header.scl_inter = 0.;
    header.cal_min = cal_min;
    header.cal_max = cal_max;
    header.glmin = 0;
    header.glmax = 0;

    Ok(MappedVolume { header, data })
}
