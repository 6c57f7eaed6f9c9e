// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking serial TX on USART3, which the NUCLEO board routes to the ST-LINK virtual COM port.
//!
//! The controller firmware opens it at `DEBUG_BAUD` and writes one `ballplate:`-prefixed line per
//! state change (boot, calibrating, tracking, config failure). Nothing is written while tracking.
//! The telemetry firmware opens it at `TELEMETRY_BAUD` and writes one
//! [`TelemetryRecord`](crate::telemetry::TelemetryRecord) per sample for the plotting host.
//!
//! Lines end in CRLF. With `writeln!`, put the `\r` in the format string.
//!
//! On the host:
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// Prefix of every controller log line.
pub const LOG_PREFIX: &str = "ballplate: ";

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write one controller log line: `ballplate: <msg>\r\n`.
    pub fn log(&mut self, msg: &str) {
        self.write_str(LOG_PREFIX);
        self.write_str(msg);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
