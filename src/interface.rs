// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capability traits at the edges of the control loop.
//!
//! The loop only reaches hardware through these: a ball position source, a tilt actuator per axis
//! and a monotonic clock.

use micromath::F32Ext;

/// Ball position on the plate, in metres.
///
/// `(0, 0)` is the "no ball" sentinel. The panel clamps readings below its calibration offset to
/// zero, and a real touch is never exactly zero on either axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Sentinel reported when no ball is on the panel.
    pub const NONE: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when neither coordinate carries the sentinel value.
    #[inline]
    pub fn ball_detected(&self) -> bool {
        self.x != 0.0 && self.y != 0.0
    }

    /// Per-axis absolute distance to `other`.
    pub fn displacement(&self, other: &Position) -> Position {
        Position {
            x: F32Ext::abs(self.x - other.x),
            y: F32Ext::abs(self.y - other.y),
        }
    }
}

/// Anything that can report where the ball is.
///
/// Reads block until the sample is complete.
pub trait PositionSensor {
    fn read_position(&mut self) -> Position;
}

/// A tilt actuator that accepts an absolute command angle in degrees. Nothing is read back.
pub trait Actuator {
    fn write_angle_deg(&mut self, angle_deg: f32);
}

/// Free-running microsecond counter. Expected to wrap at `u32::MAX`.
pub trait Clock {
    fn now_us(&mut self) -> u32;
}
