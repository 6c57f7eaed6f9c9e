// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Build-time tuning and calibration for the ball-and-plate rig.
//!
//! Everything here is fixed at compile time. Retuning means editing these constants and reflashing.

use crate::control::{Bounds, Gains, KinematicParams};
use crate::drivers::{AxisCalibration, PulseRange};

/// Everything needed to close the loop on one plate axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Target ball coordinate (m)
    pub reference_m: f32,
    pub gains: Gains,
    /// Plate tilt limits (deg)
    pub bounds: Bounds,
    pub kinematics: KinematicParams,
}

/// Reason an [`AxisConfig`] cannot be used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `bounds.lower` is not below `bounds.upper`.
    InvertedBounds,
    /// Horn length is zero or negative.
    BadHornLength,
    /// A gain or the reference is NaN or infinite.
    NonFinite,
    /// Saturated tilts would command the servo outside its travel.
    ServoRange { min_deg: f32, max_deg: f32 },
}

impl AxisConfig {
    /// Servo angles reached at the lower and upper tilt bounds.
    pub fn servo_range_deg(&self) -> (f32, f32) {
        let a = self.kinematics.servo_angle_deg(self.bounds.lower);
        let b = self.kinematics.servo_angle_deg(self.bounds.upper);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Check that the bounds and geometry keep every command inside the servo's travel.
    ///
    /// The control path never clamps after the kinematic map, so this must hold before the loop
    /// starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.reference_m,
            self.gains.kp,
            self.gains.ki,
            self.gains.kd,
            self.kinematics.level_angle_deg,
            self.kinematics.pivot_distance_m,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if !(self.bounds.lower < self.bounds.upper) {
            return Err(ConfigError::InvertedBounds);
        }
        if !(self.kinematics.horn_length_m > 0.0) {
            return Err(ConfigError::BadHornLength);
        }

        let (min_deg, max_deg) = self.servo_range_deg();
        if min_deg < 0.0 || max_deg > SERVO_TRAVEL_DEG {
            return Err(ConfigError::ServoRange { min_deg, max_deg });
        }

        Ok(())
    }
}

// ----- Plate geometry -----

/// Servo horn length, screw to screw (m)
pub const HORN_LENGTH_M: f32 = 30.0 / 1000.0;

// ----- Axes -----

pub const X_AXIS: AxisConfig = AxisConfig {
    reference_m: 79.0 / 1000.0,
    gains: Gains::new(50.0, 0.01, 21_000.0),
    bounds: Bounds::new(-6.0, 6.0),
    kinematics: KinematicParams::new(83.0, 81.0 / 1000.0, HORN_LENGTH_M),
};

pub const Y_AXIS: AxisConfig = AxisConfig {
    reference_m: 45.0 / 1000.0,
    gains: Gains::new(60.0, 0.001, 28_000.0),
    bounds: Bounds::new(-8.0, 6.0),
    kinematics: KinematicParams::new(106.0, 45.0 / 1000.0, HORN_LENGTH_M),
};

// ----- Touch panel -----

/// Panel settle time after switching terminal roles (ms)
pub const SETTLE_MS: u32 = 5;

/// 10-bit counts to millimetres along the 156 mm side.
pub const X_PANEL: AxisCalibration = AxisCalibration::new(100.0, 156.0 / 835.0, 156.0);

/// 10-bit counts to millimetres along the 95 mm side.
pub const Y_PANEL: AxisCalibration = AxisCalibration::new(70.0, 95.0 / 1000.0, 95.0);

// ----- Servos -----

pub const SERVO_TRAVEL_DEG: f32 = 180.0;

/// Pulse widths at 0° and full travel (µs)
pub const SERVO_PULSE: PulseRange = PulseRange::new(544, 2400);

/// Servo PWM frame, 50 Hz (µs)
pub const SERVO_FRAME_US: u32 = 20_000;

// ----- Serial -----

pub const DEBUG_BAUD: u32 = 115_200;
pub const TELEMETRY_BAUD: u32 = 9_600;

/// Pause between telemetry records (ms)
pub const TELEMETRY_PERIOD_MS: u32 = 100;
