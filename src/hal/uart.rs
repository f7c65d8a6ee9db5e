use core::convert::Infallible;

use avr_device::atmega128a::USART0;
use embedded_hal::serial::Write;

use crate::config::UBRR;

// UCSR0A
const TXC0: u8 = 1 << 6;
const UDRE0: u8 = 1 << 5;
const U2X0: u8 = 1 << 1;
const MPCM0: u8 = 1 << 0;

// UCSR0B
const TXEN0: u8 = 1 << 3;

// UCSR0C
const UCSZ01: u8 = 1 << 2;
const UCSZ00: u8 = 1 << 1;

/// Polled transmitter on USART0, 8 data bits.
pub struct Usart0 {
    usart: USART0,
}

impl Usart0 {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            // Enable TX
            usart.ucsr0b.modify(|r, w| w.bits(r.bits() | TXEN0));
            // 8-bit characters
            usart.ucsr0c.modify(|r, w| w.bits(r.bits() | UCSZ01 | UCSZ00));
            // Set baud rate
            usart.ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            usart.ubrr0l.write(|w| w.bits(UBRR as u8));
        }
        Self { usart }
    }

    /// Divisor as loaded into UBRR0H:UBRR0L.
    pub fn divisor(&self) -> u16 {
        let high = self.usart.ubrr0h.read().bits() as u16;
        let low = self.usart.ubrr0l.read().bits() as u16;
        (high << 8) | low
    }
}

impl Write<u8> for Usart0 {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        let status = self.usart.ucsr0a.read().bits();
        if status & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            // TXC0 is cleared by writing a one; error flags must be written as zero
            self.usart.ucsr0a.write(|w| w.bits((status & (U2X0 | MPCM0)) | TXC0));
            self.usart.udr0.write(|w| w.bits(word));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if self.usart.ucsr0a.read().bits() & TXC0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}
