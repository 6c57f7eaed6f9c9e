// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Position telemetry firmware.
//!
//! Streams the ball position and the time between samples over USART3 for live plotting on a host.
//! It does not drive the servos.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use cortex_m::delay::Delay;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use ballplate::config;
    use ballplate::control::LoopTiming;
    use ballplate::drivers::{Axis, Settle, TouchPanel};
    use ballplate::hw::{Adc, BoardPins, Led, MonotonicTimer, TouchPort, Usart};
    use ballplate::telemetry::TelemetryRecord;

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // GPIO
        let pins = BoardPins::new(dp.GPIOB, dp.GPIOD);
        let mut led_blue = Led::active_high(pins.leds.blue);

        // USART3 at the plotting host's rate
        let usart_cfg = Config {
            baud_rate: config::TELEMETRY_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        let mut usart = Usart::new(serial);

        // Touch panel
        let delay = Delay::new(cp.SYST, clocks.sysclk().raw());
        let port = TouchPort::new(dp.GPIOA, Adc::adc1(dp.ADC1));
        let mut panel = TouchPanel::new(
            port,
            Settle::new(delay, config::SETTLE_MS),
            config::X_PANEL,
            config::Y_PANEL,
        );

        let mut clock = MonotonicTimer::tim2(dp.TIM2, clocks.pclk1().raw());
        let mut timing = LoopTiming::new(clock.raw());

        // Busy-wait cycles between records
        let pause_cycles = clocks.sysclk().raw() / 1000 * config::TELEMETRY_PERIOD_MS;

        loop {
            let x_mm = panel.read_mm(Axis::X);
            let y_mm = panel.read_mm(Axis::Y);
            let dt_s = timing.elapsed_s(clock.raw());

            let record = TelemetryRecord { x_mm, y_mm, dt_s };
            let _ = record.write_to(&mut usart);
            led_blue.toggle();

            cortex_m::asm::delay(pause_cycles);
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    // Telemetry only runs on the MCU.
}
