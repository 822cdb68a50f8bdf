use crate::batch::{DecoherenceResults, TrajectoryBatch};
use crate::io::{read_snapshots, write_footer, write_header, write_results, Configuration};
use crate::utils::Timer;
use anyhow::{Context, Result};
use clap::{crate_name, crate_version, Arg, Command};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;
use std::path::{Path, PathBuf};

mod batch;
mod defaults;
mod io;
mod utils;

fn main() -> Result<()> {
    // Input.
    let matches = Command::new(crate_name!())
        .version(crate_version!())
        .about("decoherence rates and coherence intervals for trajectory surface hopping")
        .arg(
            Arg::new("snapshots")
                .help("Sets the .npz file with the trajectory snapshots")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Sets the .npz file to which the results are written")
                .short('o')
                .long("output")
                .takes_value(true),
        )
        .get_matches();
    // The snapshot file is the only mandatory input.
    let snapshot_file: PathBuf = PathBuf::from(
        matches
            .value_of("snapshots")
            .context("No snapshot file was given")?,
    );
    let output_file: PathBuf =
        PathBuf::from(matches.value_of("output").unwrap_or(defaults::OUTPUT_FILE_NAME));

    // The configuration file is read, if it does not exist in the directory
    // the default settings are written to it.
    let config: Configuration = Configuration::from_file(Path::new(defaults::CONFIG_FILE_NAME))?;

    // Multithreading.
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelization.number_of_cores)
        .build_global()
        .context("Unable to build the rayon thread pool")?;

    // Logging.
    // The log level is set.
    let log_level: LevelFilter = match config.verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    // and the logger is build.
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level)
        .init();

    // The program header is written to the command line.
    write_header();
    // and the total wall-time timer is started.
    let timer: Timer = Timer::start();

    // Computations.
    // ................................................................
    let batch: TrajectoryBatch = read_snapshots(&snapshot_file)?;
    let results: DecoherenceResults = batch.evaluate(&config.decoherence)?;
    write_results(&output_file, &results)?;
    info!("results written to {}", output_file.display());

    // ................................................................
    // The total wall-time is written to the command line.
    write_footer(timer);
    Ok(())
}
