use super::Callable;

/// Adapter that flips the verdict of a predicate.
///
/// Used to turn a predicate into its complement, such as selecting the words
/// that are not palindromes.
pub(crate) struct Negate<C>(pub(crate) C);

impl<C> Callable for Negate<C>
where
    C: Callable<Output = bool>,
{
    type Input = C::Input;
    type Output = bool;
    type Error = C::Error;

    fn call(&self, element: Self::Input) -> Result<bool, Self::Error> {
        self.0.call(element).map(|keep| !keep)
    }
}
