//! Map per-region scalar markers back onto a volumetric brain parcellation.
//!
//! Neuroimaging analyses often reduce a brain to one scalar value per
//! region of an atlas, e.g. a connectivity or morphometry statistic. This
//! crate takes such marker vectors from a delimited text file, broadcasts
//! each value into the voxels of its region in a NIfTI-1 parcellation
//! volume, and writes one compressed NIfTI volume per marker, ready for
//! inspection in any standard viewer.

pub mod atlas;
pub mod error;
pub mod mapping;
pub mod markers;
pub mod nifti;
pub mod output;
pub mod util;

pub use atlas::{load_atlas, LabeledVolume};
pub use error::{Marker2NiiError, Result};
pub use mapping::{map_to_atlas, MappedVolume, MASKED_VALUE_OFFSET};
pub use markers::{read_markers, MarkerTable};
pub use nifti::NiftiHeader;
pub use output::prepare_output;
