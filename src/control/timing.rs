// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Elapsed-time bookkeeping between control updates.

/// Smallest timestep handed to the PID (s).
///
/// Two panel settle delays separate consecutive samples, so real timesteps sit well above this. The
/// floor only matters if the clock cannot resolve the interval, where a zero `dt` would divide by
/// zero in the derivative term.
pub const MIN_DT_S: f32 = 0.001;

/// Timestamp of the last control update, in clock microseconds.
#[derive(Copy, Clone, Debug)]
pub struct LoopTiming {
    time_prev_us: u32,
}

impl LoopTiming {
    pub const fn new(now_us: u32) -> Self {
        Self { time_prev_us: now_us }
    }

    /// Restart the interval at `now_us` without producing a timestep.
    #[inline]
    pub fn stamp(&mut self, now_us: u32) {
        self.time_prev_us = now_us;
    }

    /// Seconds since the previous stamp, floored at [`MIN_DT_S`]. Restarts the interval.
    ///
    /// Counter wrap-around is handled as long as calls are less than one wrap period apart.
    pub fn elapsed_s(&mut self, now_us: u32) -> f32 {
        let dt_us = now_us.wrapping_sub(self.time_prev_us);
        self.time_prev_us = now_us;

        (dt_us as f32 * 1e-6).max(MIN_DT_S)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn measures_interval_in_seconds() {
        let mut t = LoopTiming::new(1_000);
        assert_relative_eq!(t.elapsed_s(101_000), 0.1, max_relative = 1e-6);
        assert_relative_eq!(t.elapsed_s(113_500), 0.0125, max_relative = 1e-6);
    }

    #[test]
    fn zero_interval_is_floored() {
        let mut t = LoopTiming::new(5_000);
        assert_eq!(t.elapsed_s(5_000), MIN_DT_S);
        assert_eq!(t.elapsed_s(5_200), MIN_DT_S);
    }

    #[test]
    fn survives_counter_wrap() {
        let mut t = LoopTiming::new(u32::MAX - 9_999);
        assert_relative_eq!(t.elapsed_s(10_000), 0.02, max_relative = 1e-5);
    }

    #[test]
    fn stamp_restarts_interval() {
        let mut t = LoopTiming::new(0);
        t.stamp(50_000);
        assert_relative_eq!(t.elapsed_s(60_000), 0.01, max_relative = 1e-6);
    }
}
