// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Servo PWM on TIM4 CH1/CH2 using direct PAC register access.
//!
//! The timer ticks at 1 MHz, so duty counts are pulse widths in microseconds and the full duty is one
//! servo frame. Each channel implements `embedded_hal::PwmPin` for [`Servo`](crate::drivers::Servo).

use embedded_hal::PwmPin;
use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
};

/// OCxM = PWM mode 1 with preload, in CCMR1 output layout.
const OC_PWM1_PRELOAD: u32 = (0b110 << 4) | (1 << 3);

/// PD12 = TIM4_CH1, PD13 = TIM4_CH2 (AF2).
pub struct ServoPins {
    pub x: gpiod::PD12<Alternate<2>>,
    pub y: gpiod::PD13<Alternate<2>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Channel {
    C1,
    C2,
}

/// One TIM4 output channel, holding its pin.
pub struct ServoChannel<PIN> {
    _pin: PIN,
    channel: Channel,
    max_duty: u16,
}

pub type XServoPwm = ServoChannel<gpiod::PD12<Alternate<2>>>;
pub type YServoPwm = ServoChannel<gpiod::PD13<Alternate<2>>>;

/// Configure TIM4 for servo frames and split it into its two channels.
///
/// `timer_clk_hz` is the TIM4 kernel clock; it must be a multiple of 1 MHz. `frame_us` must fit the
/// 16-bit auto-reload register.
pub fn tim4(
    tim: pac::TIM4,
    pins: ServoPins,
    timer_clk_hz: u32,
    frame_us: u32,
) -> (XServoPwm, YServoPwm) {
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

    // Disable counter while configuring
    tim.cr1.modify(|_, w| w.cen().clear_bit());

    // 1 µs tick, one frame per period
    tim.psc.write(|w| unsafe { w.bits(timer_clk_hz / 1_000_000 - 1) });
    tim.arr.write(|w| unsafe { w.bits(frame_us - 1) });

    // CH1 and CH2 in PWM mode 1, outputs off until enabled
    tim.ccmr1_output()
        .write(|w| unsafe { w.bits(OC_PWM1_PRELOAD | (OC_PWM1_PRELOAD << 8)) });
    tim.ccr1.write(|w| unsafe { w.bits(0) });
    tim.ccr2.write(|w| unsafe { w.bits(0) });
    tim.ccer.write(|w| unsafe { w.bits(0) });

    // Buffered reload, load the prescaler, start
    tim.cr1.modify(|_, w| w.arpe().set_bit());
    tim.egr.write(|w| w.ug().set_bit());
    tim.cr1.modify(|_, w| w.cen().set_bit());

    let max_duty = frame_us as u16;
    (
        ServoChannel {
            _pin: pins.x,
            channel: Channel::C1,
            max_duty,
        },
        ServoChannel {
            _pin: pins.y,
            channel: Channel::C2,
            max_duty,
        },
    )
}

impl<PIN> ServoChannel<PIN> {
    fn ccer_bit(&self) -> u32 {
        match self.channel {
            Channel::C1 => 1 << 0,
            Channel::C2 => 1 << 4,
        }
    }
}

impl<PIN> PwmPin for ServoChannel<PIN> {
    type Duty = u16;

    fn disable(&mut self) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        let bit = self.ccer_bit();
        tim.ccer.modify(|r, w| unsafe { w.bits(r.bits() & !bit) });
    }

    fn enable(&mut self) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        let bit = self.ccer_bit();
        tim.ccer.modify(|r, w| unsafe { w.bits(r.bits() | bit) });
    }

    fn get_duty(&self) -> u16 {
        let tim = unsafe { &*pac::TIM4::ptr() };
        match self.channel {
            Channel::C1 => tim.ccr1.read().bits() as u16,
            Channel::C2 => tim.ccr2.read().bits() as u16,
        }
    }

    fn get_max_duty(&self) -> u16 {
        self.max_duty
    }

    fn set_duty(&mut self, duty: u16) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        match self.channel {
            Channel::C1 => tim.ccr1.write(|w| unsafe { w.bits(duty as u32) }),
            Channel::C2 => tim.ccr2.write(|w| unsafe { w.bits(duty as u32) }),
        }
    }
}
