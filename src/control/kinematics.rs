// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Plate tilt to servo angle conversion.
//!
//! The servo horn pushes the plate edge through a linkage, so a small servo rotation tilts the plate
//! by roughly `horn_length / pivot_distance` of that rotation. Inverting this small-angle lever-arm
//! relation gives the servo command for a desired tilt:
//!
//! ```text
//! servo_deg = level_angle_deg + (pivot_distance / horn_length) * tilt_deg
//! ```
//!
//! The result is not clamped. The tilt passed in must already be saturated, and the axis bounds are
//! chosen so the mapped range stays inside the servo's travel.

/// Linkage geometry for one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicParams {
    /// Servo angle that holds the plate level (deg)
    pub level_angle_deg: f32,
    /// Distance from the plate pivot to the linkage attachment (m)
    pub pivot_distance_m: f32,
    /// Servo horn length, screw to screw (m)
    pub horn_length_m: f32,
}

impl KinematicParams {
    pub const fn new(level_angle_deg: f32, pivot_distance_m: f32, horn_length_m: f32) -> Self {
        Self {
            level_angle_deg,
            pivot_distance_m,
            horn_length_m,
        }
    }

    /// Servo degrees per degree of plate tilt.
    #[inline]
    pub fn lever_ratio(&self) -> f32 {
        self.pivot_distance_m / self.horn_length_m
    }

    /// Servo command angle for a (saturated) plate tilt angle.
    #[inline]
    pub fn servo_angle_deg(&self, tilt_deg: f32) -> f32 {
        self.level_angle_deg + self.lever_ratio() * tilt_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: KinematicParams = KinematicParams::new(83.0, 0.081, 0.030);
    const Y: KinematicParams = KinematicParams::new(106.0, 0.045, 0.030);

    #[test]
    fn zero_tilt_is_level() {
        assert_eq!(X.servo_angle_deg(0.0), 83.0);
        assert_eq!(Y.servo_angle_deg(0.0), 106.0);
    }

    #[test]
    fn bounds_map_through_lever_ratio() {
        assert_relative_eq!(X.servo_angle_deg(6.0), 83.0 + 2.7 * 6.0, max_relative = 1e-5);
        assert_relative_eq!(X.servo_angle_deg(-6.0), 83.0 - 2.7 * 6.0, max_relative = 1e-5);
        assert_relative_eq!(Y.servo_angle_deg(6.0), 115.0, max_relative = 1e-5);
        assert_relative_eq!(Y.servo_angle_deg(-8.0), 94.0, max_relative = 1e-5);
    }

    #[test]
    fn mapping_is_affine() {
        let a = X.servo_angle_deg(1.5);
        let b = X.servo_angle_deg(-2.5);
        let mid = X.servo_angle_deg(-0.5);
        assert_relative_eq!(mid, (a + b) / 2.0, max_relative = 1e-5);
    }
}
