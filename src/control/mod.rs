// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module holds the ball balancing control path, from a raw panel sample to a servo angle.
//!
//! ## Modules
//!
//! - [`validator`] - Rejects "no ball" samples and implausible jumps.
//! - [`pid`] - Discretized per-axis PID with a measured timestep.
//! - [`saturation`] - Asymmetric clamp of the plate tilt command.
//! - [`kinematics`] - Plate tilt to servo angle through the horn linkage.
//! - [`axis`] - The three stages above chained for one axis.
//! - [`timing`] - Timestep measurement between control updates.
//! - [`control_loop`] - Calibration gate and the tracking loop over both axes.

pub mod axis;
pub mod control_loop;
pub mod kinematics;
pub mod pid;
pub mod saturation;
pub mod timing;
pub mod validator;

pub use axis::{AxisCommand, AxisController};
pub use control_loop::{ControlLoop, LoopState, PlateCommand, StepOutcome};
pub use kinematics::KinematicParams;
pub use pid::{AxisPid, Gains};
pub use saturation::Bounds;
pub use timing::{LoopTiming, MIN_DT_S};
pub use validator::{Rejection, SampleValidator, MAX_JUMP_M};
