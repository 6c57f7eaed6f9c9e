// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Top-level ball balancing loop.
//!
//! The loop owns the position sensor, both tilt actuators, the clock and the per-axis controllers.
//! It starts in [`LoopState::Calibrating`] and moves to [`LoopState::Tracking`] the first time the
//! ball is seen on the panel. It never leaves `Tracking`.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut ball = ControlLoop::new(panel, x_servo, y_servo, clock, &X_AXIS, &Y_AXIS)?;
//! ball.level_plate();
//! ball.calibrate();
//! ball.run()
//! ```
//!
//! Each tracking iteration reads the ball, validates the sample against the previous one and, only
//! if it passes, updates both axes and commands the servos. A rejected sample is replaced by a fresh
//! read, and the servos keep their last command. There is no delay between iterations: the panel's
//! settle time sets the loop rate.

use crate::config::{AxisConfig, ConfigError};
use crate::control::{AxisCommand, AxisController, LoopTiming, Rejection, SampleValidator};
use crate::interface::{Actuator, Clock, Position, PositionSensor};

/// Operating state of the loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the first sample with the ball on the panel.
    Calibrating,

    /// Closed-loop control.
    Tracking,
}

/// Both axis updates from one accepted sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlateCommand {
    pub x: AxisCommand,
    pub y: AxisCommand,
    /// Timestep used for this update (s)
    pub dt_s: f32,
}

/// What a single [`ControlLoop::step`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Still no ball on the panel.
    Calibrating,
    /// Ball found. The sample becomes the first "previous" position.
    Calibrated(Position),
    /// Sample accepted and both servos commanded.
    Tracked(PlateCommand),
    /// Sample discarded and a fresh one stored in its place.
    Rejected(Rejection),
}

pub struct ControlLoop<S, AX, AY, C> {
    sensor: S,
    x_servo: AX,
    y_servo: AY,
    clock: C,

    x_axis: AxisController,
    y_axis: AxisController,
    validator: SampleValidator,
    timing: LoopTiming,

    state: LoopState,
    /// Last stored sample, compared against the next read
    previous: Position,
}

impl<S, AX, AY, C> ControlLoop<S, AX, AY, C>
where
    S: PositionSensor,
    AX: Actuator,
    AY: Actuator,
    C: Clock,
{
    /// Create a loop in the calibrating state.
    ///
    /// Fails if either axis configuration does not pass [`AxisConfig::validate`].
    pub fn new(
        sensor: S,
        x_servo: AX,
        y_servo: AY,
        clock: C,
        x_cfg: &AxisConfig,
        y_cfg: &AxisConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sensor,
            x_servo,
            y_servo,
            clock,
            x_axis: AxisController::new(x_cfg)?,
            y_axis: AxisController::new(y_cfg)?,
            validator: SampleValidator::default(),
            timing: LoopTiming::new(0),
            state: LoopState::Calibrating,
            previous: Position::NONE,
        })
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Last stored sample.
    #[inline]
    pub fn previous(&self) -> Position {
        self.previous
    }

    #[inline]
    pub fn x_axis(&self) -> &AxisController {
        &self.x_axis
    }

    #[inline]
    pub fn y_axis(&self) -> &AxisController {
        &self.y_axis
    }

    /// Command both servos to their level angles.
    pub fn level_plate(&mut self) {
        self.x_servo.write_angle_deg(self.x_axis.level_angle_deg());
        self.y_servo.write_angle_deg(self.y_axis.level_angle_deg());
    }

    /// Block until the ball is on the panel, then switch to tracking.
    ///
    /// Returns the sample that ended calibration. If the loop is already tracking, returns the stored
    /// sample immediately.
    pub fn calibrate(&mut self) -> Position {
        loop {
            if self.state == LoopState::Tracking {
                return self.previous;
            }
            if let StepOutcome::Calibrated(p) = self.step() {
                return p;
            }
        }
    }

    /// Run forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Run until `keep_going` returns false for an outcome.
    pub fn run_while<F>(&mut self, mut keep_going: F)
    where
        F: FnMut(&StepOutcome) -> bool,
    {
        loop {
            let outcome = self.step();
            if !keep_going(&outcome) {
                return;
            }
        }
    }

    /// Run one iteration of the current state.
    pub fn step(&mut self) -> StepOutcome {
        match self.state {
            LoopState::Calibrating => {
                let sample = self.sensor.read_position();
                if !sample.ball_detected() {
                    return StepOutcome::Calibrating;
                }

                self.previous = sample;
                self.timing.stamp(self.clock.now_us());
                self.state = LoopState::Tracking;
                StepOutcome::Calibrated(sample)
            }

            LoopState::Tracking => {
                let current = self.sensor.read_position();

                if let Err(rejection) = self.validator.check(current, self.previous) {
                    self.previous = self.sensor.read_position();
                    return StepOutcome::Rejected(rejection);
                }

                let dt_s = self.timing.elapsed_s(self.clock.now_us());

                let x = self.x_axis.step(current.x, dt_s);
                let y = self.y_axis.step(current.y, dt_s);
                self.x_servo.write_angle_deg(x.servo_deg);
                self.y_servo.write_angle_deg(y.servo_deg);

                self.previous = current;

                StepOutcome::Tracked(PlateCommand { x, y, dt_s })
            }
        }
    }

    /// Consume the loop and hand back the hardware.
    pub fn free(self) -> (S, AX, AY, C) {
        (self.sensor, self.x_servo, self.y_servo, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{X_AXIS, Y_AXIS};
    use crate::testing::{RecordingServo, ScriptedSensor, StepClock};
    use approx::assert_relative_eq;

    type TestLoop = ControlLoop<ScriptedSensor, RecordingServo, RecordingServo, StepClock>;

    fn make(samples: &[Position], step_us: u32) -> TestLoop {
        ControlLoop::new(
            ScriptedSensor::new(samples),
            RecordingServo::default(),
            RecordingServo::default(),
            StepClock::new(0, step_us),
            &X_AXIS,
            &Y_AXIS,
        )
        .unwrap()
    }

    const START: Position = Position::new(0.074, 0.045);

    #[test]
    fn calibration_waits_for_ball_on_both_axes() {
        let mut ball = make(
            &[
                Position::NONE,
                Position::new(0.05, 0.0),
                Position::new(0.0, 0.03),
                START,
            ],
            1_000,
        );

        assert_eq!(ball.step(), StepOutcome::Calibrating);
        assert_eq!(ball.step(), StepOutcome::Calibrating);
        assert_eq!(ball.step(), StepOutcome::Calibrating);
        assert_eq!(ball.state(), LoopState::Calibrating);

        assert_eq!(ball.step(), StepOutcome::Calibrated(START));
        assert_eq!(ball.state(), LoopState::Tracking);
        assert_eq!(ball.previous(), START);
    }

    #[test]
    fn calibrate_blocks_until_first_detection() {
        let mut ball = make(&[Position::NONE, Position::NONE, START], 1_000);

        assert_eq!(ball.calibrate(), START);

        let (sensor, xs, ys, _) = ball.free();
        assert_eq!(sensor.reads, 3);
        assert!(xs.commands.is_empty());
        assert!(ys.commands.is_empty());
    }

    #[test]
    fn reference_scenario_end_to_end() {
        // Calibration stamps t=0; the first tracked step reads t=100 ms.
        let mut ball = make(&[START, START], 100_000);
        ball.calibrate();

        let cmd = match ball.step() {
            StepOutcome::Tracked(cmd) => cmd,
            other => panic!("expected tracked step, got {:?}", other),
        };

        assert_relative_eq!(cmd.dt_s, 0.1, max_relative = 1e-6);
        assert_relative_eq!(cmd.x.raw_deg, 1050.25, max_relative = 1e-5);
        assert_eq!(cmd.x.tilt_deg, 6.0);
        assert_relative_eq!(cmd.x.servo_deg, 99.2, max_relative = 1e-5);

        let (_, xs, ys, _) = ball.free();
        assert_eq!(xs.commands.len(), 1);
        assert_relative_eq!(xs.commands[0], 99.2, max_relative = 1e-5);
        assert_eq!(ys.last(), Some(106.0));
    }

    #[test]
    fn sentinel_sample_changes_nothing() {
        let refill = Position::new(0.075, 0.046);
        let mut ball = make(&[START, START, Position::NONE, refill], 10_000);
        ball.calibrate();
        ball.step();

        let error_x = ball.x_axis().pid().error_prev();
        let error_y = ball.y_axis().pid().error_prev();

        assert_eq!(ball.step(), StepOutcome::Rejected(Rejection::NoBall));

        // The stored sample is replaced by a fresh read, not the rejected one.
        assert_eq!(ball.previous(), refill);
        assert_eq!(ball.x_axis().pid().error_prev(), error_x);
        assert_eq!(ball.y_axis().pid().error_prev(), error_y);

        let (sensor, xs, ys, clock) = ball.free();
        assert_eq!(sensor.reads, 4);
        assert_eq!(xs.commands.len(), 1);
        assert_eq!(ys.commands.len(), 1);
        // Stamp plus one tracked step: the rejection never touched the clock.
        assert_eq!(clock.reads, 2);
    }

    #[test]
    fn implausible_jump_is_rejected() {
        let jump = Position::new(0.074 + 0.0075, 0.045);
        let mut ball = make(&[START, jump, START], 10_000);
        ball.calibrate();

        assert_eq!(ball.step(), StepOutcome::Rejected(Rejection::Jump));
        assert_eq!(ball.x_axis().pid().error_prev(), 0.0);
        assert_eq!(ball.previous(), START);

        let (_, xs, ys, _) = ball.free();
        assert!(xs.commands.is_empty());
        assert!(ys.commands.is_empty());
    }

    #[test]
    fn timestep_spans_rejected_iterations() {
        // Rejections do not restamp the timing, so the next valid step sees the whole gap.
        let mut ball = make(&[START, Position::NONE, START, START], 20_000);
        ball.calibrate(); // t = 0

        assert!(matches!(ball.step(), StepOutcome::Rejected(_)));
        match ball.step() {
            StepOutcome::Tracked(cmd) => assert_relative_eq!(cmd.dt_s, 0.02, max_relative = 1e-6),
            other => panic!("expected tracked step, got {:?}", other),
        }
    }

    #[test]
    fn level_plate_commands_level_angles() {
        let mut ball = make(&[], 1_000);
        ball.level_plate();

        let (_, xs, ys, _) = ball.free();
        assert_eq!(xs.last(), Some(83.0));
        assert_eq!(ys.last(), Some(106.0));
    }

    #[test]
    fn run_while_stops_on_predicate() {
        let samples = [START, START, START, START];
        let mut ball = make(&samples, 10_000);

        let mut tracked = 0;
        ball.run_while(|outcome| {
            if let StepOutcome::Tracked(_) = outcome {
                tracked += 1;
            }
            tracked < 3
        });

        assert_eq!(tracked, 3);
        assert_eq!(ball.state(), LoopState::Tracking);
        let (sensor, _, _, _) = ball.free();
        assert_eq!(sensor.remaining(), 0);
    }

    #[test]
    fn bad_axis_config_is_refused_before_any_command() {
        let y_cfg = AxisConfig {
            bounds: crate::control::Bounds::new(6.0, -8.0),
            ..Y_AXIS
        };
        let built = ControlLoop::new(
            ScriptedSensor::new(&[START]),
            RecordingServo::default(),
            RecordingServo::default(),
            StepClock::new(0, 1_000),
            &X_AXIS,
            &y_cfg,
        );
        assert!(matches!(built, Err(ConfigError::InvertedBounds)));
    }
}
