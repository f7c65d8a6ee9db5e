use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::TIMER0_TICKS_PER_MS;

// TCCR0 clock select (CS02:0). Timer0 on the ATmega128 has its own table:
// 0b100 is clk/64 here, not clk/256 as on Timer1-3.
const PRESCALER_MASK: u8 = 0x07;
const CS0_DIV64: u8 = 0b100;

pub struct Timer0 {
    tc0: TC0,
}

impl Timer0 {
    pub fn new(tc0: TC0) -> Self {
        unsafe {
            // Initialize timer in normal mode
            tc0.tccr0.write(|w| w.bits(0));
            tc0.tcnt0.write(|w| w.bits(0));
        }
        Self { tc0 }
    }

    /// Starts counting at clk/64.
    pub fn start(&mut self) {
        unsafe {
            self.tc0
                .tccr0
                .modify(|r, w| w.bits((r.bits() & !PRESCALER_MASK) | CS0_DIV64));
        }
    }

    pub fn stop(&mut self) {
        unsafe {
            self.tc0.tccr0.modify(|r, w| w.bits(r.bits() & !PRESCALER_MASK));
        }
    }

    pub fn set_counter(&mut self, value: u8) {
        unsafe {
            self.tc0.tcnt0.write(|w| w.bits(value));
        }
    }

    pub fn get_counter(&self) -> u8 {
        self.tc0.tcnt0.read().bits()
    }
}

/// Busy-wait millisecond delay on Timer0.
pub struct Delay {
    timer: Timer0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        Self {
            timer: Timer0::new(tc0),
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // 8MHz/64 = 125kHz, 125 ticks = 1ms
        self.timer.set_counter(0);
        self.timer.start();

        for _ in 0..ms {
            while self.timer.get_counter() < TIMER0_TICKS_PER_MS {}
            self.timer.set_counter(0);
        }

        self.timer.stop();
    }
}
