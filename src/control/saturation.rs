// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-axis saturation of the plate tilt command.

/// Operating range of a plate tilt angle, in degrees.
///
/// Bounds are given per axis and need not be symmetric around zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub lower: f32,
    pub upper: f32,
}

impl Bounds {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Clamp a raw control angle into `[lower, upper]`.
    #[inline]
    pub fn saturate(&self, raw: f32) -> f32 {
        raw.clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_values_snap_to_nearest_bound() {
        let b = Bounds::new(-8.0, 6.0);
        assert_eq!(b.saturate(1050.25), 6.0);
        assert_eq!(b.saturate(6.0001), 6.0);
        assert_eq!(b.saturate(-8.5), -8.0);
        assert_eq!(b.saturate(-1.0e6), -8.0);
    }

    #[test]
    fn inside_values_pass_through_unchanged() {
        let b = Bounds::new(-8.0, 6.0);
        for v in [-8.0, -7.99, -0.5, 0.0, 3.25, 6.0] {
            assert_eq!(b.saturate(v), v);
            assert!(v >= b.lower && v <= b.upper);
        }
    }

    #[test]
    fn saturate_is_idempotent() {
        let b = Bounds::new(-6.0, 6.0);
        for v in [-100.0, -6.0, 0.1, 7.0, 1e9] {
            let once = b.saturate(v);
            assert_eq!(b.saturate(once), once);
        }
    }
}
