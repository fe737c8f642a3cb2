//! Functions for reading per-region marker values from delimited text files.
//!
//! A marker is a named vector holding one scalar value per brain region of
//! a parcellation. Markers come either as a plain-text file with a single
//! column of numbers (the file's base name is the marker name), or as a
//! csv/tsv table whose first row holds the marker names and whose first
//! column is an opaque row index.

use csv::ReaderBuilder;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Marker2NiiError, Result};
use crate::util::file_base_name;

/// An ordered set of named marker vectors, all of the same length.
///
/// Column order and names are preserved from the input file. Values may be
/// NaN, which downstream code treats as missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTable {
    pub names: Vec<String>,
    pub values: Vec<Vec<f32>>,
}

impl MarkerTable {

    /// Get the number of markers (columns) in the table.
    pub fn num_markers(&self) -> usize {
        self.names.len()
    }

    /// Iterate over the markers in table order, as (name, values) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.values.iter().map(|v| v.as_slice()))
    }
}

impl fmt::Display for MarkerTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let num_rows = self.values.first().map(|v| v.len()).unwrap_or(0);
        write!(f, "Marker table with {} markers for {} regions.", self.num_markers(), num_rows)
    }
}


/// Read a marker table from a txt, csv or tsv file.
///
/// The delimiter is inferred from the file extension. A txt file is assumed
/// to hold a single marker as a column vector of numbers, and the resulting
/// table has one column named after the file's base name. For csv and tsv
/// files the first row is taken as the header and the first column as the
/// row index; every remaining column becomes one marker, named by its
/// header field.
///
/// NaN values are kept as-is, they are not dropped.
///
/// # Examples
///
/// ```no_run
/// let markers = marker2nii::read_markers("/path/to/connectivity_markers.csv").unwrap();
/// println!("Found {} markers.", markers.num_markers());
/// ```
pub fn read_markers<P: AsRef<Path>>(path: P) -> Result<MarkerTable> {
    let ext = path
        .as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("txt") => read_plain_column(&path),
        Some("csv") => read_delimited(&path, b','),
        Some("tsv") => read_delimited(&path, b'\t'),
        _ => Err(Marker2NiiError::UnsupportedMarkerFileFormat(
            path.as_ref().to_string_lossy().into_owned(),
        )),
    }
}


/// Parse a single numeric field. Empty fields and the literal "NaN" (any
/// casing) yield NaN, which is treated as missing downstream.
fn parse_value(field: &str) -> Result<f32> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(f32::NAN);
    }
    field
        .parse::<f32>()
        .map_err(|_| Marker2NiiError::InvalidMarkerValue(field.to_string()))
}


fn read_plain_column<P: AsRef<Path>>(path: P) -> Result<MarkerTable> {
    let file = BufReader::new(File::open(&path)?);

    let mut values: Vec<f32> = Vec::new();
    for line in file.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        values.push(parse_value(&line)?);
    }

    Ok(MarkerTable {
        names: vec![file_base_name(&path)],
        values: vec![values],
    })
}


fn read_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<MarkerTable> {
    let file = BufReader::new(File::open(&path)?);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(file);

    // The first header field names the row index column, which is skipped.
    let names: Vec<String> = rdr
        .headers()?
        .iter()
        .skip(1)
        .map(|h| h.trim().to_string())
        .collect();

    let mut values: Vec<Vec<f32>> = vec![Vec::new(); names.len()];
    for record in rdr.records() {
        let record = record?;
        for (column, field) in record.iter().skip(1).enumerate() {
            values[column].push(parse_value(field)?);
        }
    }

    Ok(MarkerTable { names, values })
}
