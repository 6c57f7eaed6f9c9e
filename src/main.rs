// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Ball-and-plate controller firmware.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::fmt::Write;

    use cortex_m::delay::Delay;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use ballplate::config::{self, X_AXIS, Y_AXIS};
    use ballplate::control::ControlLoop;
    use ballplate::drivers::{Servo, Settle, TouchPanel};
    use ballplate::hw::usart::LOG_PREFIX;
    use ballplate::hw::{servo_pwm, Adc, BoardPins, Led, MonotonicTimer, TouchPort, Usart};

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

        // LED
        let mut led_red = Led::active_high(pins.leds.red);
        let mut led_green = Led::active_high(pins.leds.green);

        // USART3 (DBG)
        let usart_cfg = Config {
            baud_rate: config::DEBUG_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        let mut usart = Usart::new(serial);

        usart.log("boot");

        // Touch panel on GPIOA + ADC1, settled with SysTick
        let delay = Delay::new(cp.SYST, clocks.sysclk().raw());
        let port = TouchPort::new(dp.GPIOA, Adc::adc1(dp.ADC1));
        let panel = TouchPanel::new(
            port,
            Settle::new(delay, config::SETTLE_MS),
            config::X_PANEL,
            config::Y_PANEL,
        );

        // Servos on TIM4, timestamps on TIM2. APB1 is undivided at the default clocks, so both
        // timers run at PCLK1.
        let timer_clk_hz = clocks.pclk1().raw();
        let (x_pwm, y_pwm) =
            servo_pwm::tim4(dp.TIM4, pins.servos, timer_clk_hz, config::SERVO_FRAME_US);
        let x_servo = Servo::new(x_pwm, config::SERVO_PULSE, config::SERVO_FRAME_US);
        let y_servo = Servo::new(y_pwm, config::SERVO_PULSE, config::SERVO_FRAME_US);
        let clock = MonotonicTimer::tim2(dp.TIM2, timer_clk_hz);

        let mut ball = match ControlLoop::new(panel, x_servo, y_servo, clock, &X_AXIS, &Y_AXIS) {
            Ok(ball) => ball,
            Err(e) => {
                let _ = writeln!(usart, "{}bad axis config: {:?}\r", LOG_PREFIX, e);
                led_red.on();
                loop {
                    cortex_m::asm::nop();
                }
            }
        };
        ball.level_plate();

        led_red.on();
        usart.log("calibrating, place the ball on the plate");

        let start = ball.calibrate();

        led_red.off();
        led_green.on();
        let _ = writeln!(
            usart,
            "{}tracking from x={:.3} y={:.3} m\r",
            LOG_PREFIX, start.x, start.y
        );
        usart.flush();

        ball.run()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    // The controller only runs on the MCU; see `cargo test` for the host-side checks.
}
