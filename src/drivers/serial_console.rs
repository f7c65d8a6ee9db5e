use embedded_hal::serial::Write;
use ufmt::{uWrite, uwrite};

use crate::config::{FIRMWARE_NAME, FIRMWARE_VERSION, SAMPLE_PERIOD_MS, UART_BAUD};
use crate::protocol::send_byte;

/// Text output over the sample UART.
///
/// Anything written here lands in the same stream as the samples, so the
/// firmware only uses it behind the `debug` feature.
pub struct SerialConsole<'a, W> {
    serial: &'a mut W,
}

impl<'a, W: Write<u8>> SerialConsole<'a, W> {
    pub fn new(serial: &'a mut W) -> Self {
        Self { serial }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        send_byte(&mut *self.serial, byte)
    }

    /// Two uppercase hex digits.
    pub fn write_hex(&mut self, val: u8) -> Result<(), W::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize])?;
        self.write_byte(HEX_CHARS[(val & 0xF) as usize])
    }

    /// `[DBG] <msg>: 0xNN` line, used for register dumps at boot.
    pub fn debug(&mut self, msg: &str, val: u8) -> Result<(), W::Error> {
        self.write_str("[DBG] ")?;
        self.write_str(msg)?;
        self.write_str(": 0x")?;
        self.write_hex(val)?;
        self.write_str("\r\n")
    }

    /// Start-up line naming the firmware and its link settings.
    pub fn banner(&mut self) -> Result<(), W::Error> {
        uwrite!(
            self,
            "{} v{} {} baud, {} ms period\r\n",
            FIRMWARE_NAME,
            FIRMWARE_VERSION,
            UART_BAUD,
            SAMPLE_PERIOD_MS
        )
    }
}

impl<W: Write<u8>> uWrite for SerialConsole<'_, W> {
    type Error = W::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}
