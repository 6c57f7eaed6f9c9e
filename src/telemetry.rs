// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Plain-text position stream for plotting on a host.
//!
//! Each record is one line, `"<x_mm> <y_mm> <dt_s>\r\n"`: the coordinates have three decimals, the
//! timestep has two. The host treats the line feed as the record boundary.

use core::fmt;

/// One telemetry sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TelemetryRecord {
    pub x_mm: f32,
    pub y_mm: f32,
    /// Time since the previous record (s)
    pub dt_s: f32,
}

impl TelemetryRecord {
    /// Write the record as a single terminated line.
    pub fn write_to<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, "{:.3} {:.3} {:.2}\r\n", self.x_mm, self.y_mm, self.dt_s)
    }
}
