//! Byte-level transmit path

use embedded_hal::serial::Write;
use nb::block;

use super::Digits;

/// Separator sent after every sample
pub const DELIMITER: u8 = b' ';

/// Bytes sent per sample: four digits and the delimiter
pub const FRAME_LEN: usize = super::DIGIT_COUNT + 1;

/// Sends one byte and waits until it has left the shift register.
pub fn send_byte<S: Write<u8>>(serial: &mut S, byte: u8) -> Result<(), S::Error> {
    block!(serial.write(byte))?;
    block!(serial.flush())
}

/// Sends the four digits of a sample followed by `DELIMITER`.
pub fn send_array<S: Write<u8>>(serial: &mut S, digits: &Digits) -> Result<(), S::Error> {
    for &byte in digits.as_bytes() {
        send_byte(serial, byte)?;
    }
    send_byte(serial, DELIMITER)
}
