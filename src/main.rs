//! Command line interface for mapping markers onto a brain parcellation.

use clap::{Arg, ArgMatches, Command};
use log::debug;

use std::process;

use marker2nii::{load_atlas, map_to_atlas, prepare_output, read_markers, Result};

fn interface() -> ArgMatches {
    Command::new("marker2nii")
        .about("Map per-region marker values saved in a text file back onto the brain")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("marker_file")
                .value_name("MARKER_FILE")
                .help(
                    "Path to the input marker file. A txt file is assumed to hold one \
                     marker as a column vector. For a csv or tsv file the first column \
                     is the row index and the first row the header, and every remaining \
                     column is one marker named by its header field",
                )
                .required(true),
        )
        .arg(
            Arg::new("parcellation_file")
                .value_name("PARCELLATION_FILE")
                .help("Path to the NIfTI parcellation volume used to map the markers")
                .required(true),
        )
        .arg(
            Arg::new("out_folder")
                .value_name("OUT_FOLDER")
                .help("Path to an existing directory where the output nifti files are saved")
                .required(true),
        )
        .get_matches()
}


fn run(marker_file: &str, parcellation_file: &str, out_folder: &str) -> Result<()> {
    let output_folder = prepare_output(out_folder, marker_file)?;

    let atlas = load_atlas(parcellation_file)?;
    debug!("Loaded atlas: {}", atlas);

    let markers = read_markers(marker_file)?;
    debug!("Loaded markers: {}", markers);

    let num_markers = markers.num_markers();
    for (idx, (name, values)) in markers.iter().enumerate() {
        let mapped = map_to_atlas(name, values, &atlas)?;
        let output_file = output_folder.join(format!("{}.nii.gz", name));
        mapped.to_file(&output_file)?;
        println!("Marker {}/{}: {}", idx + 1, num_markers, output_file.display());
    }

    Ok(())
}


fn main() {
    env_logger::init();
    let args = interface();

    let marker_file = args.get_one::<String>("marker_file").unwrap();
    let parcellation_file = args.get_one::<String>("parcellation_file").unwrap();
    let out_folder = args.get_one::<String>("out_folder").unwrap();

    if let Err(err) = run(marker_file, parcellation_file, out_folder) {
        eprintln!("marker2nii: {}", err);
        process::exit(1);
    }
}
