// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One plate axis: PID, saturation and kinematic mapping chained together.

use crate::config::{AxisConfig, ConfigError};
use crate::control::{AxisPid, Bounds, KinematicParams};

/// Intermediate and final values from one axis update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisCommand {
    /// PID output before saturation (deg of plate tilt)
    pub raw_deg: f32,
    /// Saturated plate tilt (deg)
    pub tilt_deg: f32,
    /// Servo command angle (deg)
    pub servo_deg: f32,
}

/// Closed-loop controller for a single axis.
#[derive(Clone, Debug)]
pub struct AxisController {
    reference_m: f32,
    pid: AxisPid,
    bounds: Bounds,
    kinematics: KinematicParams,
}

impl AxisController {
    /// Build a controller from a validated axis configuration.
    pub fn new(cfg: &AxisConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            reference_m: cfg.reference_m,
            pid: AxisPid::new(cfg.gains),
            bounds: cfg.bounds,
            kinematics: cfg.kinematics,
        })
    }

    #[inline]
    pub fn reference_m(&self) -> f32 {
        self.reference_m
    }

    #[inline]
    pub fn pid(&self) -> &AxisPid {
        &self.pid
    }

    /// Servo angle that holds this axis level.
    #[inline]
    pub fn level_angle_deg(&self) -> f32 {
        self.kinematics.level_angle_deg
    }

    /// Run one control step for a measured ball coordinate.
    ///
    /// `dt`: seconds since the previous step, must be positive.
    pub fn step(&mut self, measured_m: f32, dt: f32) -> AxisCommand {
        let raw_deg = self.pid.update(self.reference_m, measured_m, dt);
        let tilt_deg = self.bounds.saturate(raw_deg);
        let servo_deg = self.kinematics.servo_angle_deg(tilt_deg);

        AxisCommand {
            raw_deg,
            tilt_deg,
            servo_deg,
        }
    }
}
