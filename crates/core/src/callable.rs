mod chain;
mod closure;
mod inspect;
mod mapped_err;
mod negate;

/// One unit of behavior, built once and invoked once per sequence element.
///
/// Whatever a callable needs (a factor, a word list, a closure's captures) is
/// fixed when it is built. After that it only maps an `Input` to an `Output`,
/// so a dispatcher can hand it element after element without knowing whether
/// it started life as a struct, a function item, or a closure.
///
/// `call` borrows `&self`: invoking a callable never changes what it will do
/// next time. A callable that can never fail sets `Error` to
/// [`Infallible`](std::convert::Infallible); closures are lifted with
/// [`from_fn`] and [`try_from_fn`].
///
/// Provided adapters wrap a callable in a new one:
///
/// - [`Callable::chain()`] feeds each output into a second callable.
/// - [`Callable::map_err()`] converts failures into another error type.
/// - [`Callable::inspect()`] watches inputs and outputs.
/// - [`Callable::negate()`] turns a predicate into its complement.
pub trait Callable {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces the output for one element.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when this element cannot be handled, for
    /// example when a checked multiplication overflows. Dispatchers stop at
    /// the first such error.
    fn call(&self, element: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this callable with another.
    ///
    /// # Example
    /// ```
    /// use looper_core::{Callable, Multiplier, from_fn};
    ///
    /// let double_then_add_one = Multiplier::new(2).chain(from_fn(|n: i32| n + 1));
    /// assert_eq!(double_then_add_one.call(3).unwrap(), 7);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Callable<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Callable<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }

    /// Transforms this callable's error into a different type.
    ///
    /// # Returns
    ///
    /// A new callable with the same input and output types but a transformed
    /// error type.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Callable<Input = Self::Input, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        mapped_err::MappedErr::new(self, error_map)
    }

    /// Inspects inputs and outputs without modifying behavior.
    ///
    /// # Parameters
    ///
    /// - `input_handler`: Called before each call to inspect the input.
    /// - `output_handler`: Called after each successful call to inspect the output.
    ///
    /// # Example
    ///
    /// ```
    /// use looper_core::{Callable, Multiplier};
    ///
    /// let noisy_doubler = Multiplier::new(2).inspect(
    ///     |input| println!("Received: {input}"),
    ///     |output| println!("Produced: {output}"),
    /// );
    ///
    /// assert_eq!(noisy_doubler.call(5).unwrap(), 10);
    /// // Prints:
    /// // Received: 5
    /// // Produced: 10
    /// ```
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Callable<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            callable: self,
            input_handler,
            output_handler,
        }
    }

    /// Turns a predicate into its complement.
    ///
    /// Only available when the output is `bool`.
    ///
    /// # Example
    ///
    /// ```
    /// use looper_core::{Callable, Palindrome};
    ///
    /// let not_palindrome = Palindrome::<&str>::new().negate();
    /// assert!(not_palindrome.call("ruby").unwrap());
    /// assert!(!not_palindrome.call("bob").unwrap());
    /// ```
    fn negate(self) -> impl Callable<Input = Self::Input, Output = bool, Error = Self::Error>
    where
        Self: Sized + Callable<Output = bool>,
    {
        negate::Negate(self)
    }
}

/// Wraps an infallible function or closure as a [`Callable`].
///
/// The closure's captured environment is fixed when the callable is created.
/// Use a `move` closure to snapshot the captured values.
///
/// # Example
///
/// ```
/// use looper_core::{Callable, from_fn};
///
/// let factor = 3;
/// let tripler = from_fn(move |n: i32| n * factor);
/// assert_eq!(tripler.call(4).unwrap(), 12);
/// ```
pub fn from_fn<F, I, O>(
    function: F,
) -> impl Callable<Input = I, Output = O, Error = std::convert::Infallible>
where
    F: Fn(I) -> O,
{
    closure::Closure::new(function)
}

/// Wraps a fallible function or closure as a [`Callable`].
///
/// The closure's error type becomes the callable's error type.
pub fn try_from_fn<F, I, O, E>(function: F) -> impl Callable<Input = I, Output = O, Error = E>
where
    F: Fn(I) -> Result<O, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    closure::TryClosure::new(function)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use thiserror::Error;

    use super::*;
    use crate::{CheckedMultiplier, Multiplier, OverflowError, Palindrome};

    #[derive(Debug, Error, PartialEq)]
    #[error("step {step} failed")]
    struct StepError {
        step: usize,
        #[source]
        source: OverflowError,
    }

    #[test]
    fn multipliers_keep_their_own_factor() {
        let doubler = Multiplier::new(2);
        let tripler = Multiplier::new(3);

        for n in [-4, 0, 1, 7] {
            assert_eq!(doubler.call(n), Ok(2 * n));
            assert_eq!(tripler.call(n), Ok(3 * n));
        }
    }

    #[test]
    fn closures_capture_at_creation() {
        let mut factor = 2;
        let scale = from_fn(move |n: i32| n * factor);

        factor += 1;
        let rescale = from_fn(move |n: i32| n * factor);

        assert_eq!(scale.call(5), Ok(10));
        assert_eq!(rescale.call(5), Ok(15));
        assert_eq!(scale.call(5), Ok(10));
    }

    #[test]
    fn captured_strings_are_snapshots() {
        let mut suffix = String::from("!");
        let shout = from_fn({
            let suffix = suffix.clone();
            move |word: &str| format!("{word}{suffix}")
        });

        suffix.push('?');

        assert_eq!(suffix, "!?");
        assert_eq!(shout.call("hi"), Ok("hi!".to_string()));
    }

    #[test]
    fn try_from_fn_passes_errors_through() {
        let checked_double = try_from_fn(|n: i64| CheckedMultiplier::new(2).call(n));

        assert_eq!(checked_double.call(21), Ok(42));
        assert_eq!(
            checked_double.call(i64::MIN),
            Err(OverflowError {
                value: i64::MIN,
                factor: 2,
            })
        );
    }

    #[test]
    fn map_err_adds_context_to_overflow() {
        let third_step = CheckedMultiplier::new(8).map_err(|source| StepError { step: 3, source });

        assert_eq!(third_step.call(4), Ok(32));

        let error = third_step.call(i64::MAX).unwrap_err();
        assert_eq!(error.to_string(), "step 3 failed");
        assert_eq!(
            error.source,
            OverflowError {
                value: i64::MAX,
                factor: 8,
            }
        );
    }

    #[test]
    fn inspect_sees_each_word_and_verdict() {
        let words = RefCell::new(Vec::new());
        let verdicts = RefCell::new(Vec::new());

        let watched = Palindrome::<&str>::new().inspect(
            |word| words.borrow_mut().push(word.to_string()),
            |verdict| verdicts.borrow_mut().push(*verdict),
        );

        assert_eq!(watched.call("bob"), Ok(true));
        assert_eq!(watched.call("ruby"), Ok(false));

        assert_eq!(*words.borrow(), vec!["bob", "ruby"]);
        assert_eq!(*verdicts.borrow(), vec![true, false]);
    }

    #[test]
    fn inspect_counts_attempts_but_not_failures() {
        let attempts = Cell::new(0);
        let successes = Cell::new(0);

        let counted = CheckedMultiplier::new(2).inspect(
            |_| attempts.set(attempts.get() + 1),
            |_| successes.set(successes.get() + 1),
        );

        assert!(counted.call(1).is_ok());
        assert!(counted.call(i64::MAX).is_err());

        assert_eq!(attempts.get(), 2);
        assert_eq!(successes.get(), 1);
    }

    #[test]
    fn chain_doubles_then_triples() {
        let sextuple = Multiplier::new(2).chain(Multiplier::new(3));

        assert_eq!(sextuple.call(1), Ok(6));
        assert_eq!(sextuple.call(-7), Ok(-42));
    }

    #[test]
    fn chain_stops_when_the_first_callable_fails() {
        let second_calls = Cell::new(0);
        let second = CheckedMultiplier::new(3)
            .inspect(|_| second_calls.set(second_calls.get() + 1), |_| {});

        let chained = CheckedMultiplier::new(2).chain(second);

        assert_eq!(chained.call(5), Ok(30));
        assert!(chained.call(i64::MAX).is_err());
        assert_eq!(second_calls.get(), 1);
    }

    #[test]
    fn negate_complements_palindromes() {
        let not_palindrome = Palindrome::<&str>::new().negate();

        for word in ["hello", "monday", "ruby"] {
            assert_eq!(not_palindrome.call(word), Ok(true), "{word:?}");
        }
        for word in ["mom", "bob", ""] {
            assert_eq!(not_palindrome.call(word), Ok(false), "{word:?}");
        }
    }

    #[test]
    fn negate_keeps_predicate_errors() {
        let fits_and_positive =
            try_from_fn(|n: i64| CheckedMultiplier::new(2).call(n).map(|doubled| doubled > 0));
        let not_positive = fits_and_positive.negate();

        assert_eq!(not_positive.call(-1), Ok(true));
        assert_eq!(not_positive.call(1), Ok(false));
        assert!(not_positive.call(i64::MAX).is_err());
    }
}
