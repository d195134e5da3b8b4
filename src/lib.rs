//! Session-based IMU data logger for removable storage
//!
//! This library periodically samples three sensors (accelerometer, gyroscope,
//! barometer/thermometer) and appends timestamped CSV records to a
//! sequentially-numbered file on a storage volume. Each run is a *session*:
//! at startup one unused file name is derived (`LOG1.csv`, `LOG2.csv`, ...),
//! then samples are appended to it for the life of the process.
//!
//! # Quick Start
//!
//! ## Initialize a session and log
//! ```no_run
//! use imu_sd_logger::{
//!     initialize_session, log_sample, ConsolePulse, DirStorage, MonotonicClock, SensorSuite,
//!     SessionConfig, SimAccel, SimBaro, SimGyro,
//! };
//!
//! let mut sensors = SensorSuite::new(
//!     Box::new(SimAccel::new()),
//!     Box::new(SimGyro::new()),
//!     Box::new(SimBaro),
//! );
//! let mut storage = DirStorage::new("/mnt/sdcard");
//! let clock = MonotonicClock::new();
//! let mut diag = std::io::stdout();
//!
//! let session = initialize_session(
//!     &mut sensors,
//!     &mut storage,
//!     &mut ConsolePulse::new(&clock),
//!     &mut diag,
//!     &SessionConfig::default(),
//! )?;
//!
//! loop {
//!     log_sample(&session, &mut sensors, &mut storage, &clock, &mut diag);
//! }
//! # Ok::<(), imu_sd_logger::LoggerError>(())
//! ```
//!
//! ## Custom sensor drivers
//! ```
//! use imu_sd_logger::{AccelEvent, Accelerometer, Result};
//!
//! struct MyAccel;
//!
//! impl Accelerometer for MyAccel {
//!     fn begin(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn read(&mut self) -> AccelEvent {
//!         AccelEvent { x: 0.0, y: 0.0, z: 9.81 }
//!     }
//! }
//! ```
//!
//! A sensor that fails `begin` is a warning, not an abort: the session runs
//! on with that sensor's channels degraded. A storage volume that fails to
//! mount is fatal and the session never starts.

pub mod common;
pub mod error;
pub mod sensors;
pub mod session;
pub mod signal;
pub mod sim;
pub mod storage;

// Re-export public API
pub use common::{Clock, MonotonicClock};
pub use error::{LoggerError, Result};
pub use sensors::{
    AccelEvent, Accelerometer, BaroEvent, Barometer, GyroEvent, Gyroscope, SensorReading,
    SensorSuite,
};
pub use session::{format_record, initialize_session, log_sample, Session, SessionConfig};
pub use signal::{ConsolePulse, SilentSignal, StartupSignal};
pub use sim::{SimAccel, SimBaro, SimGyro};
pub use storage::{DirStorage, Storage};
