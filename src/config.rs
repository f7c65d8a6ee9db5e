//! Configuration constants for the ADC sampling firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// USART baud-rate divisor loaded into UBRR0 at start-up.
///
/// 51 gives 9600 baud (9615 actual, +0.2%) at 8MHz.
pub const UBRR: u16 = 51;

/// Effective UART baud rate for `UBRR` at `CPU_FREQ_HZ`
pub const UART_BAUD: u32 = baud_for(CPU_FREQ_HZ, UBRR);

/// Delay between two transmitted samples in milliseconds
pub const SAMPLE_PERIOD_MS: u16 = 100;

/// Timer0 clock divider used by the millisecond delay
pub const TIMER0_PRESCALER: u32 = 64;

/// Timer0 counts per millisecond (125 @ 8MHz/64)
pub const TIMER0_TICKS_PER_MS: u8 = (CPU_FREQ_HZ / TIMER0_PRESCALER / 1000) as u8;

pub const FIRMWARE_NAME: &str = "adc-serial";
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

// TCNT0 is 8 bits wide; a millisecond must fit below its overflow.
const _: () = assert!(CPU_FREQ_HZ / TIMER0_PRESCALER / 1000 <= u8::MAX as u32);
const _: () = assert!(UBRR <= 0x0FFF);

/// Baud rate produced by a divisor in normal (U2X = 0) asynchronous mode.
pub const fn baud_for(cpu_freq_hz: u32, ubrr: u16) -> u32 {
    cpu_freq_hz / (16 * (ubrr as u32 + 1))
}

/// Closest divisor for a wanted baud rate, rounded to nearest.
pub const fn ubrr_for(cpu_freq_hz: u32, baud: u32) -> u16 {
    ((cpu_freq_hz + 8 * baud) / (16 * baud) - 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_matches_9600_baud_at_8mhz() {
        assert_eq!(ubrr_for(CPU_FREQ_HZ, 9600), UBRR);
        assert_eq!(UART_BAUD, 9615);
    }

    #[test]
    fn other_common_divisors() {
        assert_eq!(ubrr_for(8_000_000, 4800), 103);
        assert_eq!(ubrr_for(16_000_000, 9600), 103);
        assert_eq!(ubrr_for(8_000_000, 38_400), 12);
    }

    #[test]
    fn timer_ticks_per_millisecond() {
        assert_eq!(TIMER0_TICKS_PER_MS, 125);
    }
}
