//! Register-level drivers for the ATmega128 peripherals the firmware uses

pub mod adc;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, Differential01};
pub use timer::{Delay, Timer0};
pub use uart::Usart0;
