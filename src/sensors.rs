//! Sensor abstraction layer for hardware independence
//!
//! Each physical sensor sits behind a small trait so the session logger can
//! run against real bus drivers, simulated drivers, or test fakes. A driver
//! that failed to come online keeps answering reads with zeroed events; the
//! logger does not detect staleness per sample, only at initialization.

use crate::common::Clock;
use crate::error::{LoggerError, Result};

/// One 3-axis acceleration event, m/s²
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccelEvent {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One 3-axis angular-rate event, rad/s
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GyroEvent {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One pressure + temperature event, hPa and °C
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaroEvent {
    pub pressure: f32,
    pub temperature: f32,
}

/// 3-axis accelerometer driver
pub trait Accelerometer {
    /// Bring the device online; called once at session initialization
    fn begin(&mut self) -> Result<()>;

    /// Current event snapshot. Infallible: an offline driver yields zeros.
    fn read(&mut self) -> AccelEvent;
}

/// 3-axis gyroscope driver
pub trait Gyroscope {
    fn begin(&mut self) -> Result<()>;
    fn read(&mut self) -> GyroEvent;
}

/// Combined barometer/thermometer driver
pub trait Barometer {
    fn begin(&mut self) -> Result<()>;
    fn read(&mut self) -> BaroEvent;
}

/// One complete sample: nine scalar channels plus the acquisition timestamp.
///
/// Produced and consumed within a single logging cycle, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Monotonic milliseconds at acquisition time
    pub timestamp_ms: u64,
    pub accel: AccelEvent,
    pub gyro: GyroEvent,
    pub baro: BaroEvent,
}

/// The three sensor drivers a session acquires once and holds for its
/// lifetime.
pub struct SensorSuite {
    accel: Box<dyn Accelerometer>,
    gyro: Box<dyn Gyroscope>,
    baro: Box<dyn Barometer>,
}

impl SensorSuite {
    pub fn new(
        accel: Box<dyn Accelerometer>,
        gyro: Box<dyn Gyroscope>,
        baro: Box<dyn Barometer>,
    ) -> Self {
        Self { accel, gyro, baro }
    }

    /// Best-effort bring-up of all three drivers.
    ///
    /// A failed sensor is reported and skipped rather than aborting the run:
    /// partial telemetry beats none. Returns the per-sensor outcomes in
    /// (accel, gyro, baro) order so the caller can emit warnings.
    pub fn begin_all(&mut self) -> [std::result::Result<(), LoggerError>; 3] {
        [self.accel.begin(), self.gyro.begin(), self.baro.begin()]
    }

    /// Names matching the order of `begin_all` results, for diagnostics
    pub const SENSOR_NAMES: [&'static str; 3] = ["accelerometer", "gyroscope", "barometer"];

    /// Query all drivers and stamp the result with the clock's current time
    pub fn acquire(&mut self, clock: &dyn Clock) -> SensorReading {
        SensorReading {
            timestamp_ms: clock.now_ms(),
            accel: self.accel.read(),
            gyro: self.gyro.read(),
            baro: self.baro.read(),
        }
    }
}
