//! Log-session lifecycle: file-name derivation at startup and the
//! sample-acquire/format/append loop.
//!
//! A run has two phases used in strict sequence. `initialize_session` runs
//! once: it brings the sensors online best-effort, mounts storage (fatal on
//! failure), derives the first unused file name, and announces the session.
//! The resulting [`Session`] handle is then passed into `log_sample` on every
//! cycle. Nothing here is global; a second session on different collaborators
//! is just a second handle.

use std::io::Write;

use crate::common::Clock;
use crate::error::{LoggerError, Result};
use crate::sensors::{SensorReading, SensorSuite};
use crate::signal::StartupSignal;
use crate::storage::Storage;

/// Build-time constants of the original device, as runtime configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// File-name prefix, e.g. "LOG"
    pub file_prefix: String,
    /// File-name extension including the dot, e.g. ".csv"
    pub file_extension: String,
    /// Blocking delay between samples, milliseconds
    pub period_ms: u64,
    /// Highest suffix probed before giving up with `NoFreeSlot`
    pub max_sessions: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file_prefix: "LOG".to_string(),
            file_extension: ".csv".to_string(),
            period_ms: 500,
            max_sessions: 9999,
        }
    }
}

/// Handle for one logging session: the chosen output file plus pacing.
///
/// Created only by [`initialize_session`]; holding one proves storage was
/// mounted and the file name is collision-free at selection time.
#[derive(Debug, Clone)]
pub struct Session {
    file_name: String,
    number: u32,
    period_ms: u64,
}

impl Session {
    /// Name of the session's log file on storage
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The numeric suffix chosen for this session
    pub fn number(&self) -> u32 {
        self.number
    }
}

/// Probe sensors, mount storage, and pick the session's output file.
///
/// Per-sensor failures are warnings on `diag` and the run continues with that
/// sensor's channels degraded. A mount failure is fatal: no `Session` is
/// produced and `log_sample` is unreachable. On success the chosen file name
/// is reported on `diag` and `signal` pulses the session number for operators
/// without a console.
pub fn initialize_session(
    sensors: &mut SensorSuite,
    storage: &mut dyn Storage,
    signal: &mut dyn StartupSignal,
    diag: &mut dyn Write,
    config: &SessionConfig,
) -> Result<Session> {
    for (name, outcome) in SensorSuite::SENSOR_NAMES.iter().zip(sensors.begin_all()) {
        match outcome {
            Ok(()) => {
                let _ = writeln!(diag, "{} online", name);
            }
            Err(e) => {
                let _ = writeln!(diag, "warning: no {} detected ({}), continuing without it", name, e);
            }
        }
    }

    let _ = writeln!(diag, "mounting storage ...");
    storage.mount().map_err(|e| {
        let _ = writeln!(diag, "storage mount failed: {}", e);
        e
    })?;

    let session = derive_session(storage, config)?;
    let _ = writeln!(
        diag,
        "storage mounted, session {} started at {}, writing to {}",
        session.number,
        chrono::Local::now().to_rfc3339(),
        session.file_name
    );

    signal.announce(session.number);

    Ok(session)
}

/// First-fit lowest-available-suffix name search, bounded by
/// `config.max_sessions`.
fn derive_session(storage: &dyn Storage, config: &SessionConfig) -> Result<Session> {
    for suffix in 1..=config.max_sessions {
        let candidate = format!("{}{}{}", config.file_prefix, suffix, config.file_extension);
        if !storage.exists(&candidate) {
            return Ok(Session {
                file_name: candidate,
                number: suffix,
                period_ms: config.period_ms,
            });
        }
    }
    Err(LoggerError::NoFreeSlot {
        prefix: config.file_prefix.clone(),
        limit: config.max_sessions,
    })
}

/// Serialize one reading as a log record line.
///
/// Field order is fixed: timestamp, ax, ay, az, gx, gy, gz, pressure,
/// temperature. Every float is rendered with exactly two decimal places (the
/// original firmware's default float formatting), comma-delimited, terminated
/// by `\n`.
pub fn format_record(reading: &SensorReading) -> String {
    format!(
        "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}\n",
        reading.timestamp_ms,
        reading.accel.x,
        reading.accel.y,
        reading.accel.z,
        reading.gyro.x,
        reading.gyro.y,
        reading.gyro.z,
        reading.baro.pressure,
        reading.baro.temperature,
    )
}

/// Run one logging cycle: acquire, format, append, mirror, pace.
///
/// Append failures cost exactly this cycle's sample: an error line goes to
/// `diag`, no retry, no buffering, and the next invocation proceeds
/// unaffected. The record is mirrored to `diag` either way. The call always
/// finishes by blocking for the configured period, so the achieved rate is at
/// most the configured target. No error reaches the caller.
pub fn log_sample(
    session: &Session,
    sensors: &mut SensorSuite,
    storage: &mut dyn Storage,
    clock: &dyn Clock,
    diag: &mut dyn Write,
) {
    let reading = sensors.acquire(clock);
    let record = format_record(&reading);

    if let Err(e) = storage.append_line(&session.file_name, &record) {
        let _ = writeln!(diag, "error opening {}: {}", session.file_name, e);
    }

    // Mirror to the diagnostic stream regardless of the append outcome
    let _ = diag.write_all(record.as_bytes());

    clock.sleep_ms(session.period_ms);
}
