use core::convert::Infallible;

use avr_device::atmega128a::ADC;
use embedded_hal::adc::{Channel, OneShot};

// ADMUX
const REFS0: u8 = 1 << 6;
const MUX4: u8 = 1 << 4;

// ADCSRA
const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const ADPS2: u8 = 1 << 2;
const ADPS1: u8 = 1 << 1;

/// Differential input ADC0 (+) / ADC1 (-), 1x gain.
///
/// The result register holds the raw 10-bit code; negative differences
/// come back as 512..=1023 (two's complement) and are sent as-is.
pub struct Differential01;

impl Channel<Adc> for Differential01 {
    type ID = u8;

    fn channel() -> u8 {
        MUX4
    }
}

pub struct Adc {
    adc: ADC,
}

impl Adc {
    pub fn new(adc: ADC) -> Self {
        unsafe {
            // Reference voltage = AVCC, differential ADC0/ADC1
            adc.admux.write(|w| w.bits(REFS0 | Differential01::channel()));
            // Enable ADC, prescaler div64 (125kHz @ 8MHz)
            adc.adcsra.write(|w| w.bits(ADEN | ADPS2 | ADPS1));
        }
        Self { adc }
    }

    /// Single conversion on the configured input.
    pub fn convert(&mut self) -> u16 {
        unsafe {
            // Start conversion
            self.adc.adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }

        // Wait for completion
        while self.adc.adcsra.read().bits() & ADSC != 0 {}

        self.adc.adc.read().bits()
    }

    /// Current ADMUX and ADCSRA contents, for the boot report.
    pub fn control(&self) -> (u8, u8) {
        (self.adc.admux.read().bits(), self.adc.adcsra.read().bits())
    }
}

impl OneShot<Adc, u16, Differential01> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut Differential01) -> nb::Result<u16, Self::Error> {
        Ok(self.convert())
    }
}
