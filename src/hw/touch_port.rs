// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Touch panel terminals on GPIOA, switched with direct PAC register writes.
//!
//! All four terminals sit on one port and are ADC1-capable, so a terminal's role can be changed
//! with a single MODER update and any terminal can be sampled.
//!
//! | Terminal | Pin | ADC1 channel |
//! | -------- | --- | ------------ |
//! | X+       | PA3 | IN3          |
//! | X-       | PA4 | IN4          |
//! | Y+       | PA5 | IN5          |
//! | Y-       | PA6 | IN6          |

use stm32f7xx_hal::pac;

use crate::drivers::{Level, PanelIo, Terminal, TerminalMode};
use crate::hw::adc::AdcRead;

const MODER_OUTPUT: u32 = 0b01;
const MODER_ANALOG: u32 = 0b11;

/// Port A pin number of a terminal. Equal to its ADC1 channel.
#[inline]
fn pin(terminal: Terminal) -> u8 {
    match terminal {
        Terminal::XPlus => 3,
        Terminal::XMinus => 4,
        Terminal::YPlus => 5,
        Terminal::YMinus => 6,
    }
}

/// Exclusive owner of GPIOA and the ADC used to sample the panel.
pub struct TouchPort<A> {
    gpio: pac::GPIOA,
    adc: A,
}

impl<A: AdcRead> TouchPort<A> {
    /// Take GPIOA and leave all four terminals in sense mode.
    pub fn new(gpioa: pac::GPIOA, adc: A) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.ahb1enr.modify(|_, w| w.gpioaen().set_bit());

        let mut port = Self { gpio: gpioa, adc };
        for t in [
            Terminal::XPlus,
            Terminal::XMinus,
            Terminal::YPlus,
            Terminal::YMinus,
        ] {
            port.set_mode(t, TerminalMode::Sense);
        }
        port
    }

    pub fn free(self) -> (pac::GPIOA, A) {
        (self.gpio, self.adc)
    }

    fn write_moder(&mut self, n: u8, mode: u32) {
        let shift = 2 * n as u32;
        self.gpio.moder.modify(|r, w| unsafe {
            w.bits((r.bits() & !(0b11 << shift)) | (mode << shift))
        });
    }
}

impl<A: AdcRead> PanelIo for TouchPort<A> {
    fn set_mode(&mut self, terminal: Terminal, mode: TerminalMode) {
        let n = pin(terminal);

        // No pull-ups on the panel lines
        let shift = 2 * n as u32;
        self.gpio
            .pupdr
            .modify(|r, w| unsafe { w.bits(r.bits() & !(0b11 << shift)) });

        match mode {
            TerminalMode::Drive(level) => {
                // Latch the level before switching to output
                let bsrr = match level {
                    Level::High => 1u32 << n,
                    Level::Low => 1u32 << (n + 16),
                };
                self.gpio.bsrr.write(|w| unsafe { w.bits(bsrr) });
                self.write_moder(n, MODER_OUTPUT);
            }
            TerminalMode::Sense => self.write_moder(n, MODER_ANALOG),
        }
    }

    fn sample(&mut self, terminal: Terminal) -> u16 {
        self.adc.read_channel(pin(terminal))
    }
}
