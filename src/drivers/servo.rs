// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hobby servo driven from a single PWM channel.
//!
//! The servo expects one pulse per frame (20 ms at 50 Hz). The pulse width sets the horn angle,
//! linearly from `min_us` at 0° to `max_us` at 180°.

use embedded_hal::PwmPin;

use crate::interface::Actuator;

/// Full servo travel (deg).
const TRAVEL_DEG: f32 = 180.0;

/// Pulse widths at the two ends of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PulseRange {
    /// Pulse at 0° (µs)
    pub min_us: u16,
    /// Pulse at 180° (µs)
    pub max_us: u16,
}

impl PulseRange {
    pub const fn new(min_us: u16, max_us: u16) -> Self {
        Self { min_us, max_us }
    }

    /// Pulse width for an angle, clamped to the servo's travel.
    pub fn pulse_us(&self, angle_deg: f32) -> f32 {
        let angle = angle_deg.clamp(0.0, TRAVEL_DEG);
        let span = (self.max_us - self.min_us) as f32;
        self.min_us as f32 + span * angle / TRAVEL_DEG
    }
}

/// Servo on a PWM channel whose full duty equals one frame.
pub struct Servo<P> {
    pwm: P,
    pulse: PulseRange,
    frame_us: u32,
    /// Last commanded angle after clamping (deg)
    angle_deg: Option<f32>,
}

impl<P> Servo<P>
where
    P: PwmPin<Duty = u16>,
{
    /// Wrap a PWM channel and enable its output. No pulse is sent until the first command.
    pub fn new(mut pwm: P, pulse: PulseRange, frame_us: u32) -> Self {
        pwm.set_duty(0);
        pwm.enable();
        Self {
            pwm,
            pulse,
            frame_us,
            angle_deg: None,
        }
    }

    /// Move to `angle_deg`, clamped to 0–180°.
    pub fn set_angle_deg(&mut self, angle_deg: f32) {
        let pulse_us = self.pulse.pulse_us(angle_deg);
        let max_duty = self.pwm.get_max_duty() as f32;
        let duty = pulse_us * max_duty / self.frame_us as f32;

        self.pwm.set_duty((duty + 0.5) as u16);
        self.angle_deg = Some(angle_deg.clamp(0.0, TRAVEL_DEG));
    }

    /// Last commanded angle, if any.
    #[inline]
    pub fn angle_deg(&self) -> Option<f32> {
        self.angle_deg
    }

    pub fn free(self) -> P {
        self.pwm
    }
}

impl<P> Actuator for Servo<P>
where
    P: PwmPin<Duty = u16>,
{
    fn write_angle_deg(&mut self, angle_deg: f32) {
        self.set_angle_deg(angle_deg);
    }
}
