#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use adc_serial::{
    hal::{Adc, Delay, Differential01, Usart0},
    Error, Sampler,
};
#[cfg(target_arch = "avr")]
use avr_device::atmega128a::Peripherals;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let adc = Adc::new(dp.ADC);
    #[allow(unused_mut)]
    let mut usart = Usart0::new(dp.USART0);
    let delay = Delay::new(dp.TC0);

    #[cfg(feature = "debug")]
    match boot_report(&adc, &mut usart) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    let mut sampler = Sampler::<Adc, _, _, _, _>::new(adc, Differential01, usart, delay);

    match sampler.run() {
        Ok(never) => match never {},
        Err(Error::Adc(never)) => match never {},
        Err(Error::Serial(never)) => match never {},
    }
}

#[cfg(all(target_arch = "avr", feature = "debug"))]
fn boot_report(adc: &Adc, usart: &mut Usart0) -> Result<(), core::convert::Infallible> {
    use adc_serial::drivers::SerialConsole;

    let (admux, adcsra) = adc.control();
    let ubrr = usart.divisor();

    let mut console = SerialConsole::new(usart);
    console.banner()?;
    console.debug("ADMUX", admux)?;
    console.debug("ADCSRA", adcsra)?;
    console.debug("UBRR0H", (ubrr >> 8) as u8)?;
    console.debug("UBRR0L", ubrr as u8)
}

// The firmware only links for AVR; host builds get an empty binary so the
// library tests build alongside it.
#[cfg(not(target_arch = "avr"))]
fn main() {}
