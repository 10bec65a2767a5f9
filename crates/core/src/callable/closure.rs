use std::{convert::Infallible, marker::PhantomData};

use super::Callable;

/// A wrapper that allows using infallible functions as callables.
pub(crate) struct Closure<F, I, O> {
    function: F,
    _marker: PhantomData<(I, O)>,
}

impl<F, I, O> Closure<F, I, O> {
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Callable for Closure<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.function)(input))
    }
}

/// A wrapper that allows using fallible functions as callables.
pub(crate) struct TryClosure<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> TryClosure<F, I, O, E> {
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O, E> Callable for TryClosure<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)(input)
    }
}
