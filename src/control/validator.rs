// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Validity gate for touch panel samples.
//!
//! Resistive panels produce occasional spikes when the contact bounces or the layers pick up noise.
//! A sample is rejected when either coordinate is the "no ball" sentinel, or when it jumps further
//! from the previous sample than a rolling ball can travel in one loop period. The gate only compares
//! against that single previous sample and keeps no other history.

use crate::interface::Position;

/// Largest per-axis jump accepted between consecutive samples (m).
pub const MAX_JUMP_M: f32 = 0.005;

/// Why a sample was discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// One or both coordinates read as the sentinel (ball off the panel).
    NoBall,
    /// The sample moved more than the allowed jump on at least one axis.
    Jump,
}

#[derive(Copy, Clone, Debug)]
pub struct SampleValidator {
    max_jump_m: f32,
}

impl Default for SampleValidator {
    fn default() -> Self {
        Self::new(MAX_JUMP_M)
    }
}

impl SampleValidator {
    pub const fn new(max_jump_m: f32) -> Self {
        Self { max_jump_m }
    }

    /// Accept or reject `current` given the last stored sample.
    pub fn check(&self, current: Position, previous: Position) -> Result<(), Rejection> {
        if !current.ball_detected() {
            return Err(Rejection::NoBall);
        }

        let disp = current.displacement(&previous);
        if disp.x > self.max_jump_m || disp.y > self.max_jump_m {
            return Err(Rejection::Jump);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREV: Position = Position::new(0.070, 0.040);

    #[test]
    fn sentinel_is_rejected_on_either_axis() {
        let v = SampleValidator::default();
        assert_eq!(v.check(Position::NONE, PREV), Err(Rejection::NoBall));
        assert_eq!(v.check(Position::new(0.0, 0.040), PREV), Err(Rejection::NoBall));
        assert_eq!(v.check(Position::new(0.070, 0.0), PREV), Err(Rejection::NoBall));
    }

    #[test]
    fn jumps_over_five_mm_are_rejected() {
        let v = SampleValidator::default();
        assert_eq!(v.check(Position::new(0.0755, 0.040), PREV), Err(Rejection::Jump));
        assert_eq!(v.check(Position::new(0.070, 0.0345), PREV), Err(Rejection::Jump));
    }

    #[test]
    fn small_moves_are_accepted() {
        let v = SampleValidator::default();
        assert_eq!(v.check(PREV, PREV), Ok(()));
        assert_eq!(v.check(Position::new(0.074, 0.037), PREV), Ok(()));
    }

    #[test]
    fn threshold_is_inclusive() {
        let v = SampleValidator::new(0.25);
        let prev = Position::new(1.0, 1.0);
        assert_eq!(v.check(Position::new(1.25, 0.75), prev), Ok(()));
    }
}
