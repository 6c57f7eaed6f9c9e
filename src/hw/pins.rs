// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI ball-and-plate rig.
//!
//! GPIOA is not split here: the touch panel terminals (PA3–PA6) are owned raw by
//! [`TouchPort`](crate::hw::TouchPort) so their roles can be switched at run time.

use stm32f7xx_hal::{
    gpio::{gpiob, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

use crate::hw::servo_pwm::ServoPins;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart3: Usart3Pins,
    pub servos: ServoPins,
}

pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
    pub blue: gpiob::PB7<Output<PushPull>>,  // LD2
    pub red: gpiob::PB14<Output<PushPull>>,  // LD3
}

/// USART3 TX/RX, routed to the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpiob: pac::GPIOB, gpiod: pac::GPIOD) -> Self {
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();

        Self {
            leds: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            servos: ServoPins {
                x: gpiod.pd12.into_alternate::<2>(),
                y: gpiod.pd13.into_alternate::<2>(),
            },
        }
    }
}
