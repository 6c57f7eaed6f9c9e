// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers. Everything except [`led`] touches STM32F7 registers and is only built for
//! the target.

pub mod led;

#[cfg(target_os = "none")]
pub mod adc;
#[cfg(target_os = "none")]
pub mod clock;
#[cfg(target_os = "none")]
pub mod pins;
#[cfg(target_os = "none")]
pub mod servo_pwm;
#[cfg(target_os = "none")]
pub mod touch_port;
#[cfg(target_os = "none")]
pub mod usart;

pub use led::Led;

#[cfg(target_os = "none")]
pub use adc::{Adc, AdcRead};
#[cfg(target_os = "none")]
pub use clock::MonotonicTimer;
#[cfg(target_os = "none")]
pub use pins::BoardPins;
#[cfg(target_os = "none")]
pub use servo_pwm::{ServoChannel, ServoPins, XServoPwm, YServoPwm};
#[cfg(target_os = "none")]
pub use touch_port::TouchPort;
#[cfg(target_os = "none")]
pub use usart::Usart;
