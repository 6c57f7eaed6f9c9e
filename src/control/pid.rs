// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Discretized PID controller for a single plate axis.
//!
//! Works in `no_std` and does not allocate memory.
//!
//! The timestep is measured on every call rather than fixed, so the integral and derivative terms
//! follow the actual loop rate. The integral term is a two-sample window, `(e + e_prev) * dt`, not a
//! running sum: it only ever sees the current and previous error.

/// PID gain constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gains {
    /// Proportional gain
    pub kp: f32,
    /// Integral gain
    pub ki: f32,
    /// Derivative gain
    pub kd: f32,
}

impl Gains {
    pub const fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self { kp, ki, kd }
    }
}

/// PID controller holding the gains and the error from the last valid sample.
///
/// The output is not clamped here; see [`Bounds`](crate::control::Bounds).
#[derive(Clone, Debug)]
pub struct AxisPid {
    gains: Gains,

    /// Error at the last update (for derivative and integral terms)
    error_prev: f32,
}

impl AxisPid {
    /// Create a new controller with zero error history.
    pub const fn new(gains: Gains) -> Self {
        Self {
            gains,
            error_prev: 0.0,
        }
    }

    /// Error recorded by the most recent [`update`](Self::update).
    #[inline]
    pub fn error_prev(&self) -> f32 {
        self.error_prev
    }

    /// Update the controller.
    ///
    /// `reference`: desired position (m)
    /// `measurement`: current position (m)
    /// `dt`: time since the previous update in seconds, must be positive
    ///
    /// Returns the raw control angle in degrees.
    pub fn update(&mut self, reference: f32, measurement: f32, dt: f32) -> f32 {
        debug_assert!(dt > 0.0, "PID timestep must be positive");

        let error = reference - measurement;

        // ----- P term -----
        let p = self.gains.kp * error;

        // ----- I term (two-sample window) -----
        let i = self.gains.ki * (error + self.error_prev) * dt;

        // ----- D term -----
        let d = self.gains.kd * ((error - self.error_prev) / dt);

        self.error_prev = error;

        p + i + d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn expected(g: Gains, e: f32, e_prev: f32, dt: f32) -> f32 {
        g.kp * e + g.ki * (e + e_prev) * dt + g.kd * (e - e_prev) / dt
    }

    #[test]
    fn first_update_matches_discrete_formula_x_gains() {
        let g = Gains::new(50.0, 0.01, 21_000.0);
        let mut pid = AxisPid::new(g);

        let out = pid.update(0.079, 0.074, 0.1);

        assert_relative_eq!(out, expected(g, 0.005, 0.0, 0.1), max_relative = 1e-5);
        assert_relative_eq!(out, 1050.25, max_relative = 1e-5);
    }

    #[test]
    fn second_update_uses_previous_error_y_gains() {
        let g = Gains::new(60.0, 0.001, 28_000.0);
        let mut pid = AxisPid::new(g);

        pid.update(0.045, 0.050, 0.012);
        let e_prev = pid.error_prev();
        assert_relative_eq!(e_prev, -0.005, epsilon = 1e-7);

        let out = pid.update(0.045, 0.048, 0.015);
        assert_relative_eq!(
            out,
            expected(g, 0.045 - 0.048, e_prev, 0.015),
            max_relative = 1e-5
        );
    }

    #[test]
    fn integral_window_does_not_accumulate() {
        let g = Gains::new(0.0, 1.0, 0.0);
        let mut pid = AxisPid::new(g);

        // Constant error: a running integrator would keep growing, the window stays at 2*e*dt.
        let first = pid.update(1.0, 0.0, 0.5);
        let second = pid.update(1.0, 0.0, 0.5);
        let third = pid.update(1.0, 0.0, 0.5);

        assert_relative_eq!(first, 0.5);
        assert_relative_eq!(second, 1.0);
        assert_relative_eq!(third, 1.0);
    }

    #[test]
    fn derivative_scales_with_measured_timestep() {
        let g = Gains::new(0.0, 0.0, 1.0);
        let mut fast = AxisPid::new(g);
        let mut slow = AxisPid::new(g);

        let d_fast = fast.update(0.002, 0.0, 0.01);
        let d_slow = slow.update(0.002, 0.0, 0.02);

        assert_relative_eq!(d_fast, 2.0 * d_slow, max_relative = 1e-6);
    }
}
