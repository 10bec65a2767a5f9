use std::{convert::Infallible, marker::PhantomData, ops::Mul};

use thiserror::Error;

use crate::Callable;

/// A callable that multiplies its input by a captured factor.
///
/// The factor is copied in when the multiplier is created, so two multipliers
/// built with different factors never affect each other.
///
/// # Type Parameters
///
/// - `T`: The input and output type, which must support multiplication.
///
/// # Panics
///
/// Uses `T`'s plain `*`, so integer overflow panics in debug builds and wraps
/// in release builds. Use [`CheckedMultiplier`] when inputs can overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiplier<T> {
    factor: T,
}

impl<T> Multiplier<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Creates a new [`Multiplier`] with the specified factor.
    ///
    /// # Parameters
    ///
    /// - `factor`: The value by which each input will be multiplied.
    pub fn new(factor: T) -> Self {
        Self { factor }
    }

    /// Returns the captured factor.
    #[must_use]
    pub fn factor(&self) -> T {
        self.factor
    }
}

impl<T> Callable for Multiplier<T>
where
    T: Mul<Output = T> + Copy,
{
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input * self.factor)
    }
}

/// The product of a [`CheckedMultiplier`] call does not fit in an `i64`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{value} * {factor} overflows i64")]
pub struct OverflowError {
    pub value: i64,
    pub factor: i64,
}

/// An `i64` multiplier that fails instead of wrapping on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedMultiplier {
    factor: i64,
}

impl CheckedMultiplier {
    /// Creates a new [`CheckedMultiplier`] with the specified factor.
    #[must_use]
    pub fn new(factor: i64) -> Self {
        Self { factor }
    }

    /// Returns the captured factor.
    #[must_use]
    pub fn factor(&self) -> i64 {
        self.factor
    }
}

impl Callable for CheckedMultiplier {
    type Input = i64;
    type Output = i64;
    type Error = OverflowError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        input.checked_mul(self.factor).ok_or(OverflowError {
            value: input,
            factor: self.factor,
        })
    }
}

/// A callable that multiplies its input by itself.
///
/// # Panics
///
/// Like [`Multiplier`], integer overflow panics in debug builds. Chain a
/// [`CheckedMultiplier`] or wrap `checked_mul` with
/// [`try_from_fn`](crate::try_from_fn) when inputs can overflow.
#[derive(Debug, Clone, Copy)]
pub struct Square<T> {
    _marker: PhantomData<T>,
}

impl<T> Square<T> {
    /// Creates a new squaring callable.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Square<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Callable for Square<T>
where
    T: Mul<Output = T> + Copy,
{
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input * input)
    }
}
