//! ASCII sample encoding
//!
//! A sample goes on the wire as four decimal digits, most significant
//! first, zero-padded, followed by a single space.

pub mod transport;

pub use transport::{send_array, send_byte, DELIMITER, FRAME_LEN};

/// Number of digit bytes per sample
pub const DIGIT_COUNT: usize = 4;

/// Largest value that fits the four digit positions
pub const MAX_ENCODABLE: u16 = 9999;

const ASCII_ZERO: u8 = b'0';

/// Four ASCII digits, thousands first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits([u8; DIGIT_COUNT]);

impl Digits {
    pub fn as_bytes(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Reads the digits back as an integer.
    pub fn value(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d - ASCII_ZERO))
    }
}

/// Splits a conversion result into its decimal digits.
///
/// The 10-bit converter tops out at 1023, so the thousands digit is only
/// ever '0' or '1'. Anything above `MAX_ENCODABLE` would push it past '9';
/// debug builds reject such input with a panic, release builds send the
/// out-of-range thousands byte unchanged.
pub fn decode(value: u16) -> Digits {
    debug_assert!(value <= MAX_ENCODABLE);

    Digits([
        ASCII_ZERO + (value / 1000) as u8,
        ASCII_ZERO + ((value % 1000) / 100) as u8,
        ASCII_ZERO + ((value % 100) / 10) as u8,
        ASCII_ZERO + (value % 10) as u8,
    ])
}
