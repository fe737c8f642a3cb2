use quick_error::quick_error;
use std::io::Error as IOError;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum Marker2NiiError {
        /// Marker file extension is not one of txt, csv, tsv.
        UnsupportedMarkerFileFormat(path: String) {
            display("Unsupported marker file '{}': expected a txt, csv or tsv file", path)
        }

        /// A field in the marker file could not be parsed as a number.
        InvalidMarkerValue(value: String) {
            display("Invalid numeric value '{}' in marker file", value)
        }

        /// Invalid NIfTI file: wrong header size or magic number.
        InvalidNiftiFormat {
            display("Invalid NIfTI-1 volume file")
        }

        UnsupportedNiftiDataType(code: i16) {
            display("Unsupported NIfTI-1 datatype code {}", code)
        }

        UnsupportedVolumeDimensionality(ndim: i16) {
            display("Expected a 3-D volume, but the file stores {} dimensions", ndim)
        }

        /// Two-file (hdr/img pair) NIfTI volumes are not handled.
        PairedNiftiNotSupported {
            display("Two-file (hdr/img) NIfTI volumes are not supported, use a single nii or nii.gz file")
        }

        OutputDirDoesNotExist(path: String) {
            display("'{}' is not an existing directory", path)
        }

        /// Marker vector length does not match the parcellation's region count.
        RoiCountMismatch(marker: String, num_values: usize, num_rois: usize) {
            display("Marker '{}' has {} values but the parcellation has {} regions", marker, num_values, num_rois)
        }

        /// The nonzero parcellation labels are not exactly 1..=N.
        NonContiguousRoiLabels(label: i32) {
            display("Parcellation labels must be contiguous and start at 1, found unexpected label {}", label)
        }

        /// Every value of a marker is NaN, so no data range exists.
        AllMarkerValuesMissing(marker: String) {
            display("Marker '{}' contains no non-missing values", marker)
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
        }

        /// CSV parsing error (malformed or ragged csv/tsv marker table).
        Csv(err: csv::Error) {
            from()
            source(err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, Marker2NiiError>;
