use super::Callable;

/// Two callables run back to back, built by `.chain()`.
///
/// `first` sees the element; `second` sees whatever `first` returned. A
/// failure in `first` is returned as is and `second` is skipped.
pub(crate) struct Chain<A, B>
where
    A: Callable,
    B: Callable<Input = A::Output, Error = A::Error>,
{
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Callable for Chain<A, B>
where
    A: Callable,
    B: Callable<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    fn call(&self, element: Self::Input) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.call(element)?;
        self.second.call(intermediate)
    }
}
