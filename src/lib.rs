//! Samples one ADC conversion every 100 ms and streams it over USART0 as
//! four ASCII digits and a space.
//!
//! Everything above the register drivers is written against
//! `embedded-hal` traits and builds on the host for testing; `hal` only
//! exists when compiling for AVR.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod protocol;

#[cfg(all(target_arch = "avr", feature = "atmega128"))]
pub mod hal;

pub use application::Sampler;
pub use error::Error;
pub use protocol::{decode, send_array, send_byte, Digits};
