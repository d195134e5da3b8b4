//! IMU session logger - periodic sensor sampling to numbered CSV files
//!
//! Derives the first unused `LOG<n>.csv` name under the storage directory,
//! then appends one timestamped record per period until stopped.
//!
//! Usage:
//!   imu-logger --dir /mnt/sdcard --period-ms 500

use clap::Parser;
use imu_sd_logger::{
    initialize_session, log_sample, ConsolePulse, DirStorage, LoggerError, MonotonicClock,
    SensorSuite, SessionConfig, SimAccel, SimBaro, SimGyro,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "imu-logger")]
#[command(about = "Log IMU sensor samples to a numbered CSV file", long_about = None)]
struct Args {
    /// Storage directory (stands in for the SD card volume)
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Log file name prefix
    #[arg(long, default_value = "LOG")]
    prefix: String,

    /// Log file extension, including the dot
    #[arg(long, default_value = ".csv")]
    extension: String,

    /// Delay between samples in milliseconds
    #[arg(short, long, default_value = "500")]
    period_ms: u64,

    /// Number of samples to log (optional, runs until Ctrl+C if omitted)
    #[arg(short, long)]
    samples: Option<u64>,

    /// Skip the startup pulse pattern
    #[arg(long)]
    no_pulse: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("IMU Session Logger");
    println!("==================");
    println!("Storage dir: {}", args.dir.display());
    println!("Period: {} ms", args.period_ms);
    if let Some(samples) = args.samples {
        println!("Samples: {}", samples);
    } else {
        println!("Samples: continuous (Ctrl+C to stop)");
    }
    println!();

    let config = SessionConfig {
        file_prefix: args.prefix,
        file_extension: args.extension,
        period_ms: args.period_ms,
        ..SessionConfig::default()
    };

    let mut sensors = SensorSuite::new(
        Box::new(SimAccel::new()),
        Box::new(SimGyro::new()),
        Box::new(SimBaro),
    );
    let mut storage = DirStorage::new(&args.dir);
    let clock = MonotonicClock::new();
    let mut diag = std::io::stdout();

    let session = if args.no_pulse {
        initialize_session(
            &mut sensors,
            &mut storage,
            &mut imu_sd_logger::SilentSignal,
            &mut diag,
            &config,
        )
    } else {
        initialize_session(
            &mut sensors,
            &mut storage,
            &mut ConsolePulse::new(&clock),
            &mut diag,
            &config,
        )
    };

    let session = match session {
        Ok(s) => s,
        Err(LoggerError::StorageUnavailable(msg)) => {
            eprintln!("Error: storage unavailable ({})", msg);
            eprintln!("Please check:");
            eprintln!("  1. The storage directory exists and is readable");
            eprintln!("  2. The volume is mounted");
            return Err(Box::new(LoggerError::StorageUnavailable(msg)));
        }
        Err(e) => {
            eprintln!("Error initializing session: {}", e);
            return Err(Box::new(e));
        }
    };

    // Setup Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\nReceived Ctrl+C, stopping logger...");
        r.store(false, Ordering::SeqCst);
    })?;

    let run_start = std::time::Instant::now();
    let mut sample_count = 0u64;

    println!("Logging to {} ...\n", session.file_name());

    while running.load(Ordering::SeqCst) {
        log_sample(&session, &mut sensors, &mut storage, &clock, &mut diag);
        sample_count += 1;

        if let Some(limit) = args.samples {
            if sample_count >= limit {
                break;
            }
        }
    }

    let elapsed = run_start.elapsed().as_secs_f64();
    println!("\nLogging complete!");
    println!("Total samples: {}", sample_count);
    println!("Elapsed time: {:.2} seconds", elapsed);
    println!("Achieved rate: {:.1} Hz", sample_count as f64 / elapsed);
    println!("File: {}", session.file_name());

    Ok(())
}
