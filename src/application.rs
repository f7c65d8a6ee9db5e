//! Application layer: the sampling loop
//!
//! convert → decode → transmit → wait, forever.

use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Write;
use nb::block;

use crate::config::SAMPLE_PERIOD_MS;
use crate::error::{Error, Result};
use crate::protocol::{self, decode};

/// Owns the peripherals used by the main loop.
pub struct Sampler<ADC, A, P, S, D> {
    adc: A,
    channel: P,
    serial: S,
    delay: D,
    _adc: PhantomData<ADC>,
}

impl<ADC, A, P, S, D> Sampler<ADC, A, P, S, D>
where
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC>,
    S: Write<u8>,
    D: DelayMs<u16>,
{
    pub fn new(adc: A, channel: P, serial: S, delay: D) -> Self {
        Self {
            adc,
            channel,
            serial,
            delay,
            _adc: PhantomData,
        }
    }

    /// Runs one iteration and returns the sample that went out.
    pub fn step(&mut self) -> Result<u16, A::Error, S::Error> {
        let value = block!(self.adc.read(&mut self.channel)).map_err(Error::Adc)?;
        let digits = decode(value);
        protocol::send_array(&mut self.serial, &digits).map_err(Error::Serial)?;
        self.delay.delay_ms(SAMPLE_PERIOD_MS);
        Ok(value)
    }

    /// Loops until a peripheral reports an error.
    pub fn run(&mut self) -> Result<Infallible, A::Error, S::Error> {
        loop {
            self.step()?;
        }
    }

    pub fn release(self) -> (A, P, S, D) {
        (self.adc, self.channel, self.serial, self.delay)
    }
}
