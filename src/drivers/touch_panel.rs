// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for a 4-wire resistive touch panel.
//!
//! The panel is two resistive layers with a pair of terminals each. To read one axis, that axis's
//! layer is driven as a voltage divider (one terminal high, the other low) while the other layer's
//! terminals float. The floating layer picks up the voltage at the touch point, which is sampled
//! through one of its terminals.
//!
//! | Axis | Drive high | Drive low | Sampled |
//! | ---- | ---------- | --------- | ------- |
//! | X    | X+         | X-        | Y+      |
//! | Y    | Y+         | Y-        | X+      |
//!
//! The same four lines serve as drivers or sense inputs depending on the axis, so the axes are always
//! read one after the other. After every role switch the panel needs a settle delay before the
//! reading is valid.

use embedded_hal::blocking::delay::DelayMs;

use crate::interface::{Position, PositionSensor};

/// Panel terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Terminal {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
}

/// Logic level of a driven terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// Role of a panel terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminalMode {
    /// Push-pull output at a fixed level.
    Drive(Level),
    /// High-impedance analog input.
    Sense,
}

/// Panel axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Terminal I/O needed by the panel: role switching and an analog sample.
pub trait PanelIo {
    fn set_mode(&mut self, terminal: Terminal, mode: TerminalMode);

    /// Raw ADC counts at a terminal in [`TerminalMode::Sense`].
    fn sample(&mut self, terminal: Terminal) -> u16;
}

/// Fixed wait between switching terminal roles and sampling.
///
/// Owned by the panel and used for nothing else.
pub struct Settle<D> {
    delay: D,
    ms: u32,
}

impl<D: DelayMs<u32>> Settle<D> {
    pub fn new(delay: D, ms: u32) -> Self {
        Self { delay, ms }
    }

    #[inline]
    pub fn wait(&mut self) {
        self.delay.delay_ms(self.ms);
    }

    pub fn free(self) -> D {
        self.delay
    }
}

/// Linear raw-count to distance map for one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisCalibration {
    /// Reading at the panel edge (counts)
    pub offset_counts: f32,
    /// Millimetres per count
    pub mm_per_count: f32,
    /// Usable panel length (mm)
    pub extent_mm: f32,
}

impl AxisCalibration {
    pub const fn new(offset_counts: f32, mm_per_count: f32, extent_mm: f32) -> Self {
        Self {
            offset_counts,
            mm_per_count,
            extent_mm,
        }
    }

    /// Distance along the axis, clamped to `[0, extent_mm]`.
    ///
    /// Readings at or below the offset give exactly 0, the "no ball" value.
    pub fn raw_to_mm(&self, raw: u16) -> f32 {
        let mm = (raw as f32 - self.offset_counts) * self.mm_per_count;
        mm.clamp(0.0, self.extent_mm)
    }

    #[inline]
    pub fn raw_to_metres(&self, raw: u16) -> f32 {
        self.raw_to_mm(raw) / 1000.0
    }
}

/// Resistive touch panel on four switchable terminals.
pub struct TouchPanel<IO, D> {
    io: IO,
    settle: Settle<D>,
    x_cal: AxisCalibration,
    y_cal: AxisCalibration,
}

impl<IO, D> TouchPanel<IO, D>
where
    IO: PanelIo,
    D: DelayMs<u32>,
{
    pub fn new(io: IO, settle: Settle<D>, x_cal: AxisCalibration, y_cal: AxisCalibration) -> Self {
        Self {
            io,
            settle,
            x_cal,
            y_cal,
        }
    }

    /// Drive one layer, settle, and sample the other. Blocks for the settle delay.
    pub fn read_raw(&mut self, axis: Axis) -> u16 {
        let (high, low, sensed, idle) = match axis {
            Axis::X => (
                Terminal::XPlus,
                Terminal::XMinus,
                Terminal::YPlus,
                Terminal::YMinus,
            ),
            Axis::Y => (
                Terminal::YPlus,
                Terminal::YMinus,
                Terminal::XPlus,
                Terminal::XMinus,
            ),
        };

        // Release the sense pair first so both layers are never driven at once.
        self.io.set_mode(sensed, TerminalMode::Sense);
        self.io.set_mode(idle, TerminalMode::Sense);
        self.io.set_mode(high, TerminalMode::Drive(Level::High));
        self.io.set_mode(low, TerminalMode::Drive(Level::Low));

        self.settle.wait();

        self.io.sample(sensed)
    }

    /// Ball coordinate along `axis` in millimetres, 0 if nothing is touching.
    pub fn read_mm(&mut self, axis: Axis) -> f32 {
        let raw = self.read_raw(axis);
        match axis {
            Axis::X => self.x_cal.raw_to_mm(raw),
            Axis::Y => self.y_cal.raw_to_mm(raw),
        }
    }

    pub fn free(self) -> (IO, D) {
        (self.io, self.settle.free())
    }
}

impl<IO, D> PositionSensor for TouchPanel<IO, D>
where
    IO: PanelIo,
    D: DelayMs<u32>,
{
    fn read_position(&mut self) -> Position {
        // X first, then Y; the terminals are shared
        let raw_x = self.read_raw(Axis::X);
        let raw_y = self.read_raw(Axis::Y);
        Position::new(
            self.x_cal.raw_to_metres(raw_x),
            self.y_cal.raw_to_metres(raw_y),
        )
    }
}
