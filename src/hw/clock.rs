// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running microsecond counter on TIM2.
//!
//! TIM2 is 32 bits wide, so at 1 MHz it wraps about every 71 minutes. Intervals are taken with
//! wrapping arithmetic in [`LoopTiming`](crate::control::LoopTiming).

use stm32f7xx_hal::pac;

use crate::interface::Clock;

pub struct MonotonicTimer {
    tim: pac::TIM2,
}

impl MonotonicTimer {
    /// Configure TIM2 as an up-counter at 1 MHz over the full 32-bit range.
    ///
    /// `timer_clk_hz` is the TIM2 kernel clock and must be a multiple of 1 MHz.
    pub fn tim2(tim2: pac::TIM2, timer_clk_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // 1 µs tick
        tim.psc.write(|w| unsafe { w.bits(timer_clk_hz / 1_000_000 - 1) });

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Load the prescaler, then reset the counter
        tim.egr.write(|w| w.ug().set_bit());
        tim.cnt.write(|w| w.bits(0));

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Read the raw 32-bit counter value.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.tim.cnt.read().cnt().bits()
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIM2 {
        self.tim
    }
}

impl Clock for MonotonicTimer {
    fn now_us(&mut self) -> u32 {
        self.raw()
    }
}
