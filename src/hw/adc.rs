// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Basic ADC1 support for STM32F7 using direct PAC register access.
//!
//! Blocking single-channel reads at 10-bit resolution, which is the scale the touch panel
//! calibration is expressed in.
//!
//! Example:
//! ```ignore
//! let adc1 = Adc::adc1(dp.ADC1);
//! let value = adc1.read(3);
//! ```

use stm32f7xx_hal::pac;

/// ADC wrapper over a PAC ADCx peripheral.
pub struct Adc<ADC> {
    adc: ADC,
}

impl<ADC> Adc<ADC> {
    #[inline]
    pub fn free(self) -> ADC {
        self.adc
    }
}

/// Trait for reading a single channel from an ADC peripheral.
pub trait AdcRead {
    fn read_channel(&mut self, ch: u8) -> u16;
}

fn configure_common() {
    let common = unsafe { &*pac::ADC_COMMON::ptr() };

    // ADC prescaler: PCLK2 / 4
    common.ccr.modify(|_, w| w.adcpre().div4());
}

fn init_basic_adc(adc: &pac::adc1::RegisterBlock) {
    // Power off to configure
    adc.cr2.modify(|_, w| w.adon().clear_bit());

    // 10-bit, right-aligned, software trigger
    adc.cr1.modify(|_, w| w.res().bits(0b01));
    adc.cr2.modify(|_, w| {
        w.cont().clear_bit();
        w.align().right();
        w.exten().disabled();
        w
    });

    // Default minimal sample times
    adc.smpr2.modify(|_, w| unsafe { w.bits(0) });

    // Power on
    adc.cr2.modify(|_, w| w.adon().set_bit());
}

impl Adc<pac::ADC1> {
    /// Create and initialize ADC1.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        configure_common();
        init_basic_adc(&adc1);

        Self { adc: adc1 }
    }

    /// Read a single channel.
    pub fn read(&self, channel: u8) -> u16 {
        let adc = &self.adc;

        // Long sample time: the panel layer is a high source impedance
        if channel <= 9 {
            let shift = 3 * channel as u32;
            adc.smpr2
                .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << shift)) });
        }

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));

        // Set channel
        adc.sqr3
            .modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

        // Start
        adc.cr2.modify(|_, w| w.swstart().set_bit());

        // Wait for completion
        while adc.sr.read().eoc().bit_is_clear() {}

        adc.dr.read().data().bits() as u16
    }
}

impl AdcRead for Adc<pac::ADC1> {
    fn read_channel(&mut self, ch: u8) -> u16 {
        self.read(ch)
    }
}
