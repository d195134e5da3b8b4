//! Simulated sensor drivers
//!
//! Deterministic, time-parameterized signals standing in for the real I2C
//! devices, so the logger binary produces plausible records on a development
//! host. Acceleration carries gravity on Z plus a gentle sway, angular rate
//! follows the same sway, and the barometer reports a standard atmosphere at
//! room temperature.

use std::time::Instant;

use crate::error::Result;
use crate::sensors::{AccelEvent, Accelerometer, BaroEvent, Barometer, GyroEvent, Gyroscope};

const GRAVITY_MS2: f32 = 9.81;
const SEA_LEVEL_HPA: f32 = 1013.25;
const ROOM_TEMP_C: f32 = 23.5;
const SWAY_HZ: f32 = 0.5;

fn sway_phase(start: Instant) -> f32 {
    start.elapsed().as_secs_f32() * SWAY_HZ * std::f32::consts::TAU
}

/// Accelerometer reporting gravity plus a slow sway
pub struct SimAccel {
    start: Instant,
}

impl SimAccel {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SimAccel {
    fn default() -> Self {
        Self::new()
    }
}

impl Accelerometer for SimAccel {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn read(&mut self) -> AccelEvent {
        let phase = sway_phase(self.start);
        AccelEvent {
            x: 0.2 * phase.sin(),
            y: 0.2 * phase.cos(),
            z: GRAVITY_MS2,
        }
    }
}

/// Gyroscope reporting the angular rate of the same sway
pub struct SimGyro {
    start: Instant,
}

impl SimGyro {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SimGyro {
    fn default() -> Self {
        Self::new()
    }
}

impl Gyroscope for SimGyro {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn read(&mut self) -> GyroEvent {
        let phase = sway_phase(self.start);
        GyroEvent {
            x: 0.05 * phase.cos(),
            y: -0.05 * phase.sin(),
            z: 0.0,
        }
    }
}

/// Barometer/thermometer reporting a standard atmosphere
pub struct SimBaro;

impl Barometer for SimBaro {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn read(&mut self) -> BaroEvent {
        BaroEvent {
            pressure: SEA_LEVEL_HPA,
            temperature: ROOM_TEMP_C,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_accel_carries_gravity() {
        let mut accel = SimAccel::new();
        let event = accel.read();
        assert!((event.z - GRAVITY_MS2).abs() < f32::EPSILON);
        assert!(event.x.abs() <= 0.2);
        assert!(event.y.abs() <= 0.2);
    }

    #[test]
    fn test_sim_baro_is_standard_atmosphere() {
        let mut baro = SimBaro;
        let event = baro.read();
        assert_eq!(event.pressure, SEA_LEVEL_HPA);
        assert_eq!(event.temperature, ROOM_TEMP_C);
    }
}
