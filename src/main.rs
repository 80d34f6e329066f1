//! Drishti demo driver
//!
//! Pushes sweeps from measurement files (or the mock lidar) through a scan
//! buffer, answers angle queries, prints the newest sweep and runs the
//! copy / transfer / clear checks.
//!
//! Usage:
//!   drishti --resolution 0.764 input1.txt input2.txt input3.txt
//!   drishti --config drishti.toml --sweeps 5 --angle 90 --angle 45.5

use clap::Parser;
use drishti::devices::mock::MockLidar;
use drishti::io::load_measurements;
use drishti::{Config, Error, Result, ScanRingBuffer};
use std::path::PathBuf;
use std::process::ExitCode;

/// Scan buffer demo for a 180° lidar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Angular resolution in degrees (overrides the config file)
    #[arg(short, long)]
    resolution: Option<f64>,

    /// Mock sweeps to push when no input files are given
    #[arg(short = 'n', long, default_value_t = 3)]
    sweeps: usize,

    /// Angles (degrees) to query on the newest sweep
    #[arg(short, long = "angle", allow_negative_numbers = true)]
    angles: Vec<f64>,

    /// Measurement files, pushed in order
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("drishti: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(resolution) = args.resolution {
        config.driver.resolution = resolution;
        config.validate()?;
    }

    Ok(config)
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let mut buffer = ScanRingBuffer::new(config.driver.resolution)?;
    let mut lidar = MockLidar::new(&config.mock);
    log::info!(
        "Scan buffer ready: resolution {}°, {} measurements per sweep",
        buffer.resolution(),
        buffer.measurements_per_scan()
    );

    if args.inputs.is_empty() {
        for i in 0..args.sweeps {
            let sweep = lidar.generate_sweep(buffer.resolution());
            push(&mut buffer, &sweep, &format!("mock sweep {}", i + 1))?;
        }
    } else {
        for path in &args.inputs {
            let values = load_measurements(path)?;
            push(&mut buffer, &values, &path.display().to_string())?;
        }
    }

    for &angle in &args.angles {
        match buffer.get_distance(angle) {
            Ok(distance) => log::info!("Distance at {angle}°: {distance:.3}"),
            Err(e) => log::warn!("Query at {angle}° failed: {e}"),
        }
    }

    println!("{buffer}");

    check_copy_and_transfer(&mut buffer, &mut lidar)
}

fn push(buffer: &mut ScanRingBuffer, values: &[f64], source: &str) -> Result<()> {
    if buffer.is_full() {
        let returns = buffer.oldest().map_or(0, |scan| scan.valid_count());
        log::info!("Buffer full, {source} evicts the oldest sweep ({returns} returns)");
    }

    match buffer.push_scan(values) {
        Ok(()) => {
            let latest = buffer.latest().map_or(0, |scan| scan.valid_count());
            log::info!(
                "Pushed {source}: {} values supplied, {latest} with a return",
                values.len()
            );
            Ok(())
        }
        Err(e @ Error::InvalidMeasurement { .. }) => {
            log::warn!("Rejected {source}: {e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Clone, transfer and clear the buffer, comparing a random angle each time
fn check_copy_and_transfer(buffer: &mut ScanRingBuffer, lidar: &mut MockLidar) -> Result<()> {
    if buffer.is_empty() {
        log::warn!("Buffer empty, skipping copy/transfer checks");
        return Ok(());
    }

    let copy = buffer.clone();
    compare("copy", buffer, &copy, lidar.random_angle())?;

    let mut source = copy.clone();
    let moved = source.take();
    compare("transfer", buffer, &moved, lidar.random_angle())?;
    log::info!(
        "Transfer source: empty={}, resolution={}",
        source.is_empty(),
        source.resolution()
    );

    buffer.clear();
    match buffer.pop_scan() {
        Err(Error::EmptyBuffer) => log::info!("clear: buffer is empty"),
        Ok(_) => log::error!("clear: buffer still holds a sweep"),
        Err(e) => return Err(e),
    }

    for (i, scan) in copy.iter().enumerate() {
        log::info!(
            "Copy sweep {} survives clear: {} returns",
            i + 1,
            scan.valid_count()
        );
    }
    Ok(())
}

fn compare(
    label: &str,
    original: &ScanRingBuffer,
    other: &ScanRingBuffer,
    angle: f64,
) -> Result<()> {
    let expected = original.get_distance(angle)?;
    let actual = other.get_distance(angle)?;

    if original.resolution() == other.resolution() && expected == actual {
        log::info!("{label}: ok (distance at {angle}° = {actual:.3})");
    } else {
        log::error!(
            "{label}: mismatch at {angle}°: {expected} (r={}) vs {actual} (r={})",
            original.resolution(),
            other.resolution()
        );
    }
    Ok(())
}
