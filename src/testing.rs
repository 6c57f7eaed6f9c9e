// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side stand-ins for the hardware capabilities, shared by the unit tests.

use std::collections::VecDeque;

use crate::interface::{Actuator, Clock, Position, PositionSensor};

/// Replays a fixed list of samples, then reports "no ball" forever.
pub struct ScriptedSensor {
    samples: VecDeque<Position>,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(samples: &[Position]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            reads: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl PositionSensor for ScriptedSensor {
    fn read_position(&mut self) -> Position {
        self.reads += 1;
        self.samples.pop_front().unwrap_or(Position::NONE)
    }
}

/// Keeps every angle it was commanded.
#[derive(Default)]
pub struct RecordingServo {
    pub commands: Vec<f32>,
}

impl RecordingServo {
    pub fn last(&self) -> Option<f32> {
        self.commands.last().copied()
    }
}

impl Actuator for RecordingServo {
    fn write_angle_deg(&mut self, angle_deg: f32) {
        self.commands.push(angle_deg);
    }
}

/// Returns `start`, then advances by `step_us` on every read.
pub struct StepClock {
    now_us: u32,
    step_us: u32,
    pub reads: usize,
}

impl StepClock {
    pub fn new(start_us: u32, step_us: u32) -> Self {
        Self {
            now_us: start_us,
            step_us,
            reads: 0,
        }
    }
}

impl Clock for StepClock {
    fn now_us(&mut self) -> u32 {
        let now = self.now_us;
        self.now_us = self.now_us.wrapping_add(self.step_us);
        self.reads += 1;
        now
    }
}
