// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device drivers that sit above the raw `hw/` layer and below the control
//! loop. They are generic over `embedded-hal` traits and the panel I/O trait, so they also run
//! against the fakes in the unit tests.
//!
//! ## Existing drivers
//!
//! - [`touch_panel`] – 4-wire resistive touch panel (implements `PositionSensor`)
//! - [`servo`] – hobby servo on a PWM channel (implements `Actuator`)

pub mod servo;
pub mod touch_panel;

pub use servo::{PulseRange, Servo};
pub use touch_panel::{
    Axis, AxisCalibration, Level, PanelIo, Settle, Terminal, TerminalMode, TouchPanel,
};
