//! Errors surfaced by the sampling loop

/// Failure reported by one of the two peripherals.
///
/// The AVR drivers never fail, so on hardware both parameters are
/// `Infallible` and this type cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<A, S> {
    Adc(A),
    Serial(S),
}

pub type Result<T, A, S> = core::result::Result<T, Error<A, S>>;
