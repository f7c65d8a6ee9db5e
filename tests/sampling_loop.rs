use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use adc_serial::config::SAMPLE_PERIOD_MS;
use adc_serial::protocol::{DELIMITER, FRAME_LEN};
use adc_serial::{decode, send_array, Sampler};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Write;
use embedded_hal_mock::adc::{Mock as AdcMock, MockAdc, MockChan0, Transaction};

/// Milliseconds elapsed on the simulated board.
#[derive(Clone, Default)]
struct Clock(Rc<Cell<u32>>);

impl Clock {
    fn now(&self) -> u32 {
        self.0.get()
    }
}

struct SimDelay(Clock);

impl DelayMs<u16> for SimDelay {
    fn delay_ms(&mut self, ms: u16) {
        let clock = &(self.0).0;
        clock.set(clock.get() + u32::from(ms));
    }
}

/// Captures every byte with the simulated time it went out.
#[derive(Clone, Default)]
struct Wire {
    clock: Clock,
    sent: Rc<RefCell<Vec<(u32, u8)>>>,
    pending: Option<u8>,
}

impl Wire {
    fn bytes(&self) -> Vec<u8> {
        self.sent.borrow().iter().map(|&(_, b)| b).collect()
    }

    fn times(&self) -> Vec<u32> {
        self.sent.borrow().iter().map(|&(t, _)| t).collect()
    }
}

impl Write<u8> for Wire {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        // Data register still holds the previous byte until flushed
        if self.pending.is_some() {
            return Err(nb::Error::WouldBlock);
        }
        self.pending = Some(word);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if let Some(word) = self.pending.take() {
            self.sent.borrow_mut().push((self.clock.now(), word));
        }
        Ok(())
    }
}

fn sampler_for(
    samples: &[u16],
) -> (
    Sampler<MockAdc, AdcMock<u16>, MockChan0, Wire, SimDelay>,
    Wire,
    Clock,
) {
    let expectations: Vec<_> = samples.iter().map(|&v| Transaction::read(0, v)).collect();
    let clock = Clock::default();
    let wire = Wire {
        clock: clock.clone(),
        ..Wire::default()
    };
    let sampler = Sampler::new(
        AdcMock::new(&expectations),
        MockChan0,
        wire.clone(),
        SimDelay(clock.clone()),
    );
    (sampler, wire, clock)
}

#[test]
fn stream_of_three_samples() {
    let (mut sampler, wire, clock) = sampler_for(&[0, 512, 1023]);

    for expected in [0, 512, 1023] {
        assert_eq!(sampler.step(), Ok(expected));
    }

    assert_eq!(wire.bytes(), b"0000 0512 1023 ".to_vec());
    assert_eq!(clock.now(), 3 * u32::from(SAMPLE_PERIOD_MS));

    // Groups are one sample period apart
    let starts: Vec<u32> = wire.times().into_iter().step_by(FRAME_LEN).collect();
    assert_eq!(starts, vec![0, 100, 200]);

    let (mut adc, _, _, _) = sampler.release();
    adc.done();
}

#[test]
fn n_iterations_produce_n_groups() {
    let samples: Vec<u16> = (0..50).map(|i| (i * 21) % 1024).collect();
    let (mut sampler, wire, _) = sampler_for(&samples);

    for _ in 0..samples.len() {
        sampler.step().unwrap();
    }

    let bytes = wire.bytes();
    assert_eq!(bytes.len(), samples.len() * FRAME_LEN);

    for (group, &value) in bytes.chunks(FRAME_LEN).zip(&samples) {
        assert_eq!(group[..4], decode(value).as_bytes()[..]);
        assert_eq!(group[4], DELIMITER);
    }

    let (mut adc, _, _, _) = sampler.release();
    adc.done();
}

#[test]
fn every_frame_is_five_bytes() {
    for value in [0u16, 1, 9, 10, 99, 100, 512, 999, 1000, 1023] {
        let mut wire = Wire::default();
        send_array(&mut wire, &decode(value)).unwrap();

        let bytes = wire.bytes();
        assert_eq!(bytes.len(), 5);
        assert_eq!(bytes[4], 0x20);
    }
}
