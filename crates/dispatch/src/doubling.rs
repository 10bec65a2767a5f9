//! Dispatch over a doubling sequence.
//!
//! A doubling sequence starts at a given value and doubles on every step:
//! `start, 2 * start, 4 * start, ...`. Each term after the first is produced
//! by calling a [`CheckedMultiplier`] on the previous term, so the sequence
//! ends with an [`OverflowError`] instead of wrapping.
//!
//! Terms are produced lazily. [`for_each`] emits every term it has before
//! trying to compute the next one, so an overflow late in the sequence still
//! leaves the earlier terms emitted.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use log::debug;
use looper_core::{Callable, CheckedMultiplier, OverflowError};

use crate::{Sink, for_each_invoke_into};

/// An iterator over the terms of a doubling sequence.
///
/// Yields `Err` at most once, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Terms {
    doubler: CheckedMultiplier,
    start: i64,
    previous: Option<i64>,
    remaining: usize,
}

impl Iterator for Terms {
    type Item = Result<i64, OverflowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let term = match self.previous {
            None => Ok(self.start),
            Some(previous) => self.doubler.call(previous),
        };

        match term {
            Ok(value) => self.previous = Some(value),
            Err(_) => self.remaining = 0,
        }

        Some(term)
    }
}

/// Returns the lazy terms of the doubling sequence starting at `start`.
#[must_use]
pub fn terms(start: i64, config: &Config) -> Terms {
    Terms {
        doubler: CheckedMultiplier::new(2),
        start,
        previous: None,
        remaining: config.steps(),
    }
}

/// Collects the doubling sequence starting at `start`.
///
/// # Errors
///
/// Returns an [`OverflowError`] if a term does not fit in an `i64`.
///
/// # Example
///
/// ```
/// use looper_dispatch::doubling::{Config, sequence};
///
/// assert_eq!(sequence(5, &Config::default()).unwrap(), [5, 10, 20, 40, 80]);
/// ```
pub fn sequence(start: i64, config: &Config) -> Result<Vec<i64>, OverflowError> {
    terms(start, config).collect()
}

/// Invokes `callable` on each term of the doubling sequence, handing each
/// result to `sink`.
///
/// # Errors
///
/// Returns [`Error::Dispatch`] if the callable or sink fails, or
/// [`Error::Overflow`] once a term does not fit in an `i64`. Every term before
/// the failing one has already been dispatched.
pub fn for_each<C, S>(
    start: i64,
    config: &Config,
    callable: &C,
    sink: &mut S,
) -> Result<(), Error<C::Error, S::Error>>
where
    C: Callable<Input = i64>,
    S: Sink<C::Output>,
{
    let mut overflow = None;
    let terms = terms(start, config).map_while(|term| term.map_err(|e| overflow = Some(e)).ok());

    for_each_invoke_into(terms, callable, sink).map_err(Error::Dispatch)?;

    match overflow {
        Some(error) => {
            debug!("doubling: sequence from {start} overflowed: {error}");
            Err(Error::Overflow(error))
        }
        None => Ok(()),
    }
}
