//! Functions for reading and writing brain volumes in binary NIfTI-1 files.
//!
//! Only the single-file variant (`.nii` or gzip-compressed `.nii.gz`) is
//! handled. The header endianness is detected from the `sizeof_hdr` field,
//! so both little- and big-endian files can be read. Output files are
//! always written little-endian.

use byteordered::{ByteOrdered, Endianness};
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use ndarray::{Array3, ShapeBuilder};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Marker2NiiError, Result};
use crate::util::is_gz_file;

pub const NIFTI1_HEADER_SIZE: i32 = 348;
pub const NIFTI1_DATA_START: i32 = 352; // The vox_offset used for single-file NIfTI output.

/// Upper bound on the voxel count of a volume we are willing to read. The
/// dim fields of a corrupt header can claim up to 32767^3 voxels; real
/// brain volumes stay far below this bound.
pub const MAX_VOLUME_VOXELS: usize = 1 << 30;

pub const NIFTI_TYPE_UINT8: i16 = 2;
pub const NIFTI_TYPE_INT16: i16 = 4;
pub const NIFTI_TYPE_INT32: i16 = 8;
pub const NIFTI_TYPE_FLOAT32: i16 = 16;
pub const NIFTI_TYPE_FLOAT64: i16 = 64;

pub const NIFTI_MAGIC_SINGLE: [u8; 4] = *b"n+1\0";
pub const NIFTI_MAGIC_PAIR: [u8; 4] = *b"ni1\0";

/// Models the header of a NIfTI-1 file containing a brain volume.
///
/// The obsolete ANALYZE compatibility fields (`data_type`, `db_name`,
/// `extents`, `session_error`, `regular`) are skipped on read and written
/// as zero bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct NiftiHeader {
    pub dim_info: u8,
    pub dim: [i16; 8],
    pub intent_p1: f32,
    pub intent_p2: f32,
    pub intent_p3: f32,
    pub intent_code: i16,
    pub datatype: i16,
    pub bitpix: i16,
    pub slice_start: i16,
    pub pixdim: [f32; 8],
    pub vox_offset: f32,
    pub scl_slope: f32,
    pub scl_inter: f32,
    pub slice_end: i16,
    pub slice_code: u8,
    pub xyzt_units: u8,
    pub cal_max: f32,
    pub cal_min: f32,
    pub slice_duration: f32,
    pub toffset: f32,
    pub glmax: i32,
    pub glmin: i32,
    pub descrip: [u8; 80],
    pub aux_file: [u8; 24],
    pub qform_code: i16,
    pub sform_code: i16,
    pub quatern_b: f32,
    pub quatern_c: f32,
    pub quatern_d: f32,
    pub qoffset_x: f32,
    pub qoffset_y: f32,
    pub qoffset_z: f32,
    pub srow_x: [f32; 4],
    pub srow_y: [f32; 4],
    pub srow_z: [f32; 4],
    pub intent_name: [u8; 16],
    pub magic: [u8; 4],
}


impl Default for NiftiHeader {
    fn default() -> NiftiHeader {
        NiftiHeader {
            dim_info: 0,
            dim: [3, 1, 1, 1, 1, 1, 1, 1],
            intent_p1: 0.,
            intent_p2: 0.,
            intent_p3: 0.,
            intent_code: 0,
            datatype: NIFTI_TYPE_FLOAT32,
            bitpix: 32,
            slice_start: 0,
            pixdim: [1.; 8],
            vox_offset: NIFTI1_DATA_START as f32,
            scl_slope: 1.,
            scl_inter: 0.,
            slice_end: 0,
            slice_code: 0,
            xyzt_units: 0,
            cal_max: 0.,
            cal_min: 0.,
            slice_duration: 0.,
            toffset: 0.,
            glmax: 0,
            glmin: 0,
            descrip: [0; 80],
            aux_file: [0; 24],
            qform_code: 0,
            sform_code: 0,
            quatern_b: 0.,
            quatern_c: 0.,
            quatern_d: 0.,
            qoffset_x: 0.,
            qoffset_y: 0.,
            qoffset_z: 0.,
            srow_x: [0.; 4],
            srow_y: [0.; 4],
            srow_z: [0.; 4],
            intent_name: [0; 16],
            magic: NIFTI_MAGIC_SINGLE,
        }
    }
}


impl NiftiHeader {

    /// Read a NIfTI-1 header from a file.
    /// If the file's name ends with ".gz", the file is assumed to need GZip decoding.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<NiftiHeader> {
        let gz = is_gz_file(&path);
        let mut file = BufReader::new(File::open(path)?);
        if gz {
            let (hdr, _) = NiftiHeader::from_reader(&mut GzDecoder::new(file))?;
            Ok(hdr)
        } else {
            let (hdr, _) = NiftiHeader::from_reader(&mut file)?;
            Ok(hdr)
        }
    }


    /// Read a NIfTI-1 header from the given byte stream.
    ///
    /// It is assumed that the input is currently at the start of the header.
    /// Returns the header together with the detected file endianness, so
    /// that callers can keep reading the data part of the stream.
    pub fn from_reader<S>(input: &mut S) -> Result<(NiftiHeader, Endianness)>
    where
        S: Read,
    {
        let mut probe = ByteOrdered::le(input);
        let sizeof_hdr = probe.read_i32()?;

        let endian = if sizeof_hdr == NIFTI1_HEADER_SIZE {
            Endianness::Little
        } else if sizeof_hdr.swap_bytes() == NIFTI1_HEADER_SIZE {
            Endianness::Big
        } else {
            return Err(Marker2NiiError::InvalidNiftiFormat);
        };

        let mut input = ByteOrdered::runtime(probe.into_inner(), endian);
        let mut hdr = NiftiHeader::default();

        for _ in 0..35 {
            input.read_u8()?; // ANALYZE compatibility fields, bytes 4..39.
        }
        hdr.dim_info = input.read_u8()?;

        for v in hdr.dim.iter_mut() {
            *v = input.read_i16()?;
        }

        hdr.intent_p1 = input.read_f32()?;
        hdr.intent_p2 = input.read_f32()?;
        hdr.intent_p3 = input.read_f32()?;
        hdr.intent_code = input.read_i16()?;

        hdr.datatype = input.read_i16()?;
        hdr.bitpix = input.read_i16()?;
        hdr.slice_start = input.read_i16()?;

        for v in hdr.pixdim.iter_mut() {
            *v = input.read_f32()?;
        }

        hdr.vox_offset = input.read_f32()?;
        hdr.scl_slope = input.read_f32()?;
        hdr.scl_inter = input.read_f32()?;
        hdr.slice_end = input.read_i16()?;
        hdr.slice_code = input.read_u8()?;
        hdr.xyzt_units = input.read_u8()?;
        hdr.cal_max = input.read_f32()?;
        hdr.cal_min = input.read_f32()?;
        hdr.slice_duration = input.read_f32()?;
        hdr.toffset = input.read_f32()?;
        hdr.glmax = input.read_i32()?;
        hdr.glmin = input.read_i32()?;

        for v in hdr.descrip.iter_mut() {
            *v = input.read_u8()?;
        }
        for v in hdr.aux_file.iter_mut() {
            *v = input.read_u8()?;
        }

        hdr.qform_code = input.read_i16()?;
        hdr.sform_code = input.read_i16()?;
        hdr.quatern_b = input.read_f32()?;
        hdr.quatern_c = input.read_f32()?;
        hdr.quatern_d = input.read_f32()?;
        hdr.qoffset_x = input.read_f32()?;
        hdr.qoffset_y = input.read_f32()?;
        hdr.qoffset_z = input.read_f32()?;

        for v in hdr.srow_x.iter_mut() {
            *v = input.read_f32()?;
        }
        for v in hdr.srow_y.iter_mut() {
            *v = input.read_f32()?;
        }
        for v in hdr.srow_z.iter_mut() {
            *v = input.read_f32()?;
        }

        for v in hdr.intent_name.iter_mut() {
            *v = input.read_u8()?;
        }
        for v in hdr.magic.iter_mut() {
            *v = input.read_u8()?;
        }

        if hdr.magic != NIFTI_MAGIC_SINGLE && hdr.magic != NIFTI_MAGIC_PAIR {
            return Err(Marker2NiiError::InvalidNiftiFormat);
        }

        Ok((hdr, endian))
    }


    /// Write this header to the given byte stream, in little-endian order.
    pub fn to_writer<S>(&self, output: &mut S) -> Result<()>
    where
        S: Write,
    {
        let mut output = ByteOrdered::le(output);

        output.write_i32(NIFTI1_HEADER_SIZE)?;
        for _ in 0..35 {
            output.write_u8(0)?; // ANALYZE compatibility fields, bytes 4..39.
        }
        output.write_u8(self.dim_info)?;

        for v in self.dim.iter() {
            output.write_i16(*v)?;
        }

        output.write_f32(self.intent_p1)?;
        output.write_f32(self.intent_p2)?;
        output.write_f32(self.intent_p3)?;
        output.write_i16(self.intent_code)?;

        output.write_i16(self.datatype)?;
        output.write_i16(self.bitpix)?;
        output.write_i16(self.slice_start)?;

        for v in self.pixdim.iter() {
            output.write_f32(*v)?;
        }

        output.write_f32(self.vox_offset)?;
        output.write_f32(self.scl_slope)?;
        output.write_f32(self.scl_inter)?;
        output.write_i16(self.slice_end)?;
        output.write_u8(self.slice_code)?;
        output.write_u8(self.xyzt_units)?;
        output.write_f32(self.cal_max)?;
        output.write_f32(self.cal_min)?;
        output.write_f32(self.slice_duration)?;
        output.write_f32(self.toffset)?;
        output.write_i32(self.glmax)?;
        output.write_i32(self.glmin)?;

        for v in self.descrip.iter() {
            output.write_u8(*v)?;
        }
        for v in self.aux_file.iter() {
            output.write_u8(*v)?;
        }

        output.write_i16(self.qform_code)?;
        output.write_i16(self.sform_code)?;
        output.write_f32(self.quatern_b)?;
        output.write_f32(self.quatern_c)?;
        output.write_f32(self.quatern_d)?;
        output.write_f32(self.qoffset_x)?;
        output.write_f32(self.qoffset_y)?;
        output.write_f32(self.qoffset_z)?;

        for v in self.srow_x.iter() {
            output.write_f32(*v)?;
        }
        for v in self.srow_y.iter() {
            output.write_f32(*v)?;
        }
        for v in self.srow_z.iter() {
            output.write_f32(*v)?;
        }

        for v in self.intent_name.iter() {
            output.write_u8(*v)?;
        }
        for v in self.magic.iter() {
            output.write_u8(*v)?;
        }

        Ok(())
    }


    /// Get the spatial dimensions of the volume described by this header.
    ///
    /// The volume must be 3-D. A 4-D volume with a singleton trailing
    /// dimension is treated as 3-D.
    pub fn spatial_dims(&self) -> Result<(usize, usize, usize)> {
        let ndim = self.dim[0];
        let is_3d = ndim == 3 || (ndim == 4 && self.dim[4] <= 1);
        if !is_3d {
            return Err(Marker2NiiError::UnsupportedVolumeDimensionality(ndim));
        }
        if self.dim[1] < 1 || self.dim[2] < 1 || self.dim[3] < 1 {
            return Err(Marker2NiiError::InvalidNiftiFormat);
        }
        Ok((self.dim[1] as usize, self.dim[2] as usize, self.dim[3] as usize))
    }
}


/// Read a 3-D volume from a single-file NIfTI-1 file as f32 data.
///
/// Voxel values are converted to f32 from any of the supported on-disk
/// datatypes (uint8, int16, int32, float32, float64) and rescaled with
/// `scl_slope` / `scl_inter` if a slope is set.
///
/// # Examples
///
/// ```no_run
/// let (hdr, data) = marker2nii::nifti::read_nifti("/path/to/atlas.nii.gz").unwrap();
/// println!("Volume has {} voxels.", data.len());
/// ```
pub fn read_nifti<P: AsRef<Path>>(path: P) -> Result<(NiftiHeader, Array3<f32>)> {
    let gz = is_gz_file(&path);
    let file = BufReader::new(File::open(path)?);
    if gz {
        read_nifti_from(GzDecoder::new(file))
    } else {
        read_nifti_from(file)
    }
}


fn read_nifti_from<S>(mut input: S) -> Result<(NiftiHeader, Array3<f32>)>
where
    S: Read,
{
    let (hdr, endian) = NiftiHeader::from_reader(&mut input)?;

    if hdr.magic != NIFTI_MAGIC_SINGLE {
        return Err(Marker2NiiError::PairedNiftiNotSupported);
    }

    let (dim1len, dim2len, dim3len) = hdr.spatial_dims()?;
    let num_voxels = dim1len * dim2len * dim3len;
    if num_voxels > MAX_VOLUME_VOXELS {
        return Err(Marker2NiiError::InvalidNiftiFormat);
    }

    let mut input = ByteOrdered::runtime(input, endian);

    // The gap between header and data is read byte-wise because we cannot
    // seek in a GZ stream.
    let data_start = hdr.vox_offset.max(NIFTI1_HEADER_SIZE as f32) as i64;
    for _ in (NIFTI1_HEADER_SIZE as i64)..data_start {
        input.read_u8()?;
    }

    let mut data: Vec<f32> = Vec::with_capacity(num_voxels);
    match hdr.datatype {
        NIFTI_TYPE_UINT8 => {
            for _ in 0..num_voxels {
                data.push(input.read_u8()? as f32);
            }
        }
        NIFTI_TYPE_INT16 => {
            for _ in 0..num_voxels {
                data.push(input.read_i16()? as f32);
            }
        }
        NIFTI_TYPE_INT32 => {
            for _ in 0..num_voxels {
                data.push(input.read_i32()? as f32);
            }
        }
        NIFTI_TYPE_FLOAT32 => {
            for _ in 0..num_voxels {
                data.push(input.read_f32()?);
            }
        }
        NIFTI_TYPE_FLOAT64 => {
            for _ in 0..num_voxels {
                data.push(input.read_f64()? as f32);
            }
        }
        other => {
            return Err(Marker2NiiError::UnsupportedNiftiDataType(other));
        }
    }

    if hdr.scl_slope != 0. && !(hdr.scl_slope == 1. && hdr.scl_inter == 0.) {
        for v in data.iter_mut() {
            *v = *v * hdr.scl_slope + hdr.scl_inter;
        }
    }

    // NIfTI stores voxels in Fortran order, with the first dimension fastest.
    let data = Array3::from_shape_vec((dim1len, dim2len, dim3len).f(), data)
        .map_err(|_| Marker2NiiError::InvalidNiftiFormat)?;

    Ok((hdr, data))
}


/// Write a 3-D f32 volume to a single-file NIfTI-1 file.
///
/// If the path ends with ".gz" the output is GZip-compressed. The header's
/// spatial dimensions are checked against the shape of `data` and a
/// mismatch is rejected; datatype, bitpix and vox_offset are taken from
/// the header as given.
pub fn write_nifti<P: AsRef<Path>>(path: P, hdr: &NiftiHeader, data: &Array3<f32>) -> Result<()> {
    let gz = is_gz_file(&path);
    let mut file = BufWriter::new(File::create(path)?);
    if gz {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_nifti_to(&mut encoder, hdr, data)?;
        encoder.finish()?.flush()?;
    } else {
        write_nifti_to(&mut file, hdr, data)?;
        file.flush()?;
    }
    Ok(())
}


fn write_nifti_to<S>(mut output: S, hdr: &NiftiHeader, data: &Array3<f32>) -> Result<()>
where
    S: Write,
{
    if hdr.spatial_dims()? != data.dim() {
        return Err(Marker2NiiError::InvalidNiftiFormat);
    }

    hdr.to_writer(&mut output)?;

    let mut output = ByteOrdered::le(output);

    // Pad up to vox_offset with zero bytes (4 for the default offset of 352).
    let data_start = hdr.vox_offset.max(NIFTI1_HEADER_SIZE as f32) as i64;
    for _ in (NIFTI1_HEADER_SIZE as i64)..data_start {
        output.write_u8(0)?;
    }

    let (dim1len, dim2len, dim3len) = data.dim();
    for k in 0..dim3len {
        for j in 0..dim2len {
            for i in 0..dim1len {
                output.write_f32(data[[i, j, k]])?;
            }
        }
    }

    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Cursor;

    #[test]
    fn a_header_can_be_written_and_read_back() {
        let mut hdr = NiftiHeader::default();
        hdr.dim = [3, 4, 5, 6, 1, 1, 1, 1];
        hdr.cal_min = -1.5;
        hdr.cal_max = 2.5;
        hdr.sform_code = 1;
        hdr.srow_x = [2., 0., 0., -90.];
        hdr.srow_y = [0., 2., 0., -126.];
        hdr.srow_z = [0., 0., 2., -72.];

        let mut buf: Vec<u8> = Vec::new();
        hdr.to_writer(&mut buf).unwrap();
        assert_eq!(NIFTI1_HEADER_SIZE as usize, buf.len());

        let (hdr2, endian) = NiftiHeader::from_reader(&mut Cursor::new(buf)).unwrap();
        assert_eq!(Endianness::Little, endian);
        assert_eq!(hdr, hdr2);
    }

    #[test]
    fn a_volume_can_be_written_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let vol_path = dir.path().join("vol.nii.gz");

        let data = Array3::from_shape_fn((3, 2, 2), |(i, j, k)| (i + 10 * j + 100 * k) as f32);
        let mut hdr = NiftiHeader::default();
        hdr.dim = [3, 3, 2, 2, 1, 1, 1, 1];
        hdr.qoffset_x = -90.;

        write_nifti(&vol_path, &hdr, &data).unwrap();
        let (hdr2, data2) = read_nifti(&vol_path).unwrap();

        assert_eq!(hdr, hdr2);
        assert_eq!(hdr, NiftiHeader::from_file(&vol_path).unwrap());
        assert_eq!(data.dim(), data2.dim());
        assert_abs_diff_eq!(data2[[0, 0, 0]], 0.0);
        assert_abs_diff_eq!(data2[[2, 1, 1]], 112.0);
    }

    #[test]
    fn uncompressed_volumes_are_supported_as_well() {
        let dir = tempfile::tempdir().unwrap();
        let vol_path = dir.path().join("vol.nii");

        let data = Array3::from_elem((2, 2, 1), 3.25_f32);
        let mut hdr = NiftiHeader::default();
        hdr.dim = [3, 2, 2, 1, 1, 1, 1, 1];

        write_nifti(&vol_path, &hdr, &data).unwrap();
        let (_, data2) = read_nifti(&vol_path).unwrap();
        assert_abs_diff_eq!(data2[[1, 1, 0]], 3.25);
    }

    #[test]
    fn garbage_input_is_rejected() {
        let res = NiftiHeader::from_reader(&mut Cursor::new(vec![0_u8; 400]));
        assert!(res.is_err());
    }

    /// Hand-assemble a minimal single-file header (plus the 4 padding bytes
    /// before the data part), byte by byte, so the read path can be tested
    /// independently of our own writer.
    fn raw_header(dim: &[i16], datatype: i16, bitpix: i16, slope: f32, inter: f32, be: bool) -> Vec<u8> {
        fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
            buf[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        let i16b = |v: i16| -> [u8; 2] { if be { v.to_be_bytes() } else { v.to_le_bytes() } };
        let i32b = |v: i32| -> [u8; 4] { if be { v.to_be_bytes() } else { v.to_le_bytes() } };
        let f32b = |v: f32| -> [u8; 4] { if be { v.to_be_bytes() } else { v.to_le_bytes() } };

        let mut buf = vec![0_u8; NIFTI1_DATA_START as usize];
        put(&mut buf, 0, &i32b(NIFTI1_HEADER_SIZE));
        for (idx, d) in dim.iter().enumerate() {
            put(&mut buf, 40 + 2 * idx, &i16b(*d));
        }
        put(&mut buf, 70, &i16b(datatype));
        put(&mut buf, 72, &i16b(bitpix));
        put(&mut buf, 108, &f32b(NIFTI1_DATA_START as f32)); // vox_offset
        put(&mut buf, 112, &f32b(slope));
        put(&mut buf, 116, &f32b(inter));
        put(&mut buf, 344, &NIFTI_MAGIC_SINGLE);
        buf
    }

    #[test]
    fn int16_volumes_are_rescaled_on_read() {
        let mut bytes = raw_header(&[3, 2, 1, 1], NIFTI_TYPE_INT16, 16, 2.0, 1.0, false);
        bytes.extend_from_slice(&3_i16.to_le_bytes());
        bytes.extend_from_slice(&(-7_i16).to_le_bytes());

        let (hdr, data) = read_nifti_from(Cursor::new(bytes)).unwrap();

        assert_eq!(NIFTI_TYPE_INT16, hdr.datatype);
        assert_abs_diff_eq!(data[[0, 0, 0]], 3.0 * 2.0 + 1.0);
        assert_abs_diff_eq!(data[[1, 0, 0]], -7.0 * 2.0 + 1.0);
    }

    #[test]
    fn big_endian_files_are_detected_and_read() {
        let mut bytes = raw_header(&[3, 2, 1, 1], NIFTI_TYPE_FLOAT32, 32, 1.0, 0.0, true);
        bytes.extend_from_slice(&5.5_f32.to_be_bytes());
        bytes.extend_from_slice(&(-2.0_f32).to_be_bytes());

        let (_, endian) = NiftiHeader::from_reader(&mut Cursor::new(&bytes[..348])).unwrap();
        assert_eq!(Endianness::Big, endian);

        let (hdr, data) = read_nifti_from(Cursor::new(bytes)).unwrap();
        assert_eq!([3, 2, 1, 1, 0, 0, 0, 0], hdr.dim);
        assert_abs_diff_eq!(data[[0, 0, 0]], 5.5);
        assert_abs_diff_eq!(data[[1, 0, 0]], -2.0);
    }

    #[test]
    fn integer_and_double_datatypes_are_converted_to_f32() {
        let mut bytes = raw_header(&[3, 1, 1, 1], NIFTI_TYPE_UINT8, 8, 1.0, 0.0, false);
        bytes.push(200);
        let (_, data) = read_nifti_from(Cursor::new(bytes)).unwrap();
        assert_abs_diff_eq!(data[[0, 0, 0]], 200.0);

        let mut bytes = raw_header(&[3, 1, 1, 1], NIFTI_TYPE_INT32, 32, 1.0, 0.0, false);
        bytes.extend_from_slice(&(-123456_i32).to_le_bytes());
        let (_, data) = read_nifti_from(Cursor::new(bytes)).unwrap();
        assert_abs_diff_eq!(data[[0, 0, 0]], -123456.0);

        let mut bytes = raw_header(&[3, 1, 1, 1], NIFTI_TYPE_FLOAT64, 64, 1.0, 0.0, false);
        bytes.extend_from_slice(&0.125_f64.to_le_bytes());
        let (_, data) = read_nifti_from(Cursor::new(bytes)).unwrap();
        assert_abs_diff_eq!(data[[0, 0, 0]], 0.125);
    }

    #[test]
    fn a_singleton_fourth_dimension_is_accepted_as_3d() {
        let mut bytes = raw_header(&[4, 2, 1, 1, 1], NIFTI_TYPE_FLOAT32, 32, 1.0, 0.0, false);
        bytes.extend_from_slice(&1.0_f32.to_le_bytes());
        bytes.extend_from_slice(&2.0_f32.to_le_bytes());

        let (hdr, data) = read_nifti_from(Cursor::new(bytes)).unwrap();

        assert_eq!((2, 1, 1), hdr.spatial_dims().unwrap());
        assert_eq!((2, 1, 1), data.dim());
        assert_abs_diff_eq!(data[[1, 0, 0]], 2.0);
    }

    #[test]
    fn a_four_dimensional_time_series_is_rejected() {
        let bytes = raw_header(&[4, 2, 1, 1, 3], NIFTI_TYPE_FLOAT32, 32, 1.0, 0.0, false);
        let res = read_nifti_from(Cursor::new(bytes));
        assert!(matches!(res, Err(Marker2NiiError::UnsupportedVolumeDimensionality(4))));
    }

    #[test]
    fn unknown_datatype_codes_are_rejected() {
        let bytes = raw_header(&[3, 1, 1, 1], 128, 24, 1.0, 0.0, false); // RGB24
        let res = read_nifti_from(Cursor::new(bytes));
        assert!(matches!(res, Err(Marker2NiiError::UnsupportedNiftiDataType(128))));
    }

    #[test]
    fn absurd_header_dims_are_rejected_before_allocation() {
        let bytes = raw_header(&[3, 32767, 32767, 32767], NIFTI_TYPE_FLOAT32, 32, 1.0, 0.0, false);
        let res = read_nifti_from(Cursor::new(bytes));
        assert!(matches!(res, Err(Marker2NiiError::InvalidNiftiFormat)));
    }

    #[test]
    fn mismatched_header_and_data_shapes_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.nii.gz");

        let data = Array3::from_elem((2, 2, 2), 1.0_f32);
        let mut hdr = NiftiHeader::default();
        hdr.dim = [3, 4, 4, 4, 1, 1, 1, 1];

        let res = write_nifti(&path, &hdr, &data);
        assert!(matches!(res, Err(Marker2NiiError::InvalidNiftiFormat)));
    }
}
