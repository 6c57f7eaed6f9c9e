// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Ball-and-Plate Firmware
//!
//! This crate balances a ball on a two-axis tilting plate. A 4-wire resistive touch panel measures
//! the ball, and two hobby servos tilt the plate. The firmware is written in Rust and targets an
//! STM32F767 MCU (NUCLEO-F767ZI).
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`interface`] | Capability traits between the control loop and hardware |
//! | [`control`]   | Sample validation, PID, saturation, kinematics, the control loop |
//! | [`drivers`]   | Touch panel and servo drivers over `embedded-hal` traits |
//! | [`hw`]        | MCU-level wrappers around ADC, timers, GPIO, USART (target only) |
//! | [`config`]    | Build-time gains, limits, geometry and calibration |
//! | [`telemetry`] | Line format of the position stream |
//!
//! ## Binaries
//!
//! - `ballplate` - the balancing controller.
//! - `telemetry` - streams the raw ball position over serial for plotting. It does no control.
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf --bin ballplate
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod hw;
pub mod interface;
pub mod telemetry;

#[cfg(test)]
mod testing;
