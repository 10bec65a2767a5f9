use std::{fmt::Display, io};

use log::{debug, trace};
use looper_core::Callable;

use crate::{DispatchError, LineSink, Sink, short_type_name};

/// Invokes `callable` on each element and prints each result on its own line.
///
/// Elements are visited in order. Each result is written to standard output
/// before the next element is visited. An empty sequence prints nothing.
///
/// # Errors
///
/// Returns [`DispatchError::Call`] with the callable's error as soon as an
/// invocation fails, or [`DispatchError::Emit`] if writing to standard output
/// fails. Later elements are not visited in either case.
///
/// # Example
///
/// ```
/// use looper_core::Multiplier;
/// use looper_dispatch::for_each_invoke;
///
/// // Prints 2, 4, 6 on separate lines.
/// for_each_invoke([1, 2, 3], &Multiplier::new(2)).unwrap();
/// ```
pub fn for_each_invoke<I, C>(
    sequence: I,
    callable: &C,
) -> Result<(), DispatchError<C::Error, io::Error>>
where
    I: IntoIterator<Item = C::Input>,
    C: Callable,
    C::Output: Display,
{
    let mut sink = LineSink::stdout();
    for_each_invoke_into(sequence, callable, &mut sink)
}

/// Invokes `callable` on each element and hands each result to `sink`.
///
/// This is [`for_each_invoke`] with the output destination left to the caller.
///
/// # Errors
///
/// Returns [`DispatchError::Call`] if the callable fails or
/// [`DispatchError::Emit`] if the sink fails. Dispatch stops at the first
/// failure.
pub fn for_each_invoke_into<I, C, S>(
    sequence: I,
    callable: &C,
    sink: &mut S,
) -> Result<(), DispatchError<C::Error, S::Error>>
where
    I: IntoIterator<Item = C::Input>,
    C: Callable,
    S: Sink<C::Output>,
{
    let name = short_type_name::<C>();
    debug!("for_each_invoke: dispatching `{name}`");

    let mut visited = 0;
    for (index, element) in sequence.into_iter().enumerate() {
        trace!("for_each_invoke: calling `{name}` on element {index}");

        let output = callable.call(element).map_err(|error| {
            debug!("for_each_invoke: `{name}` failed on element {index}: {error}");
            DispatchError::Call(error)
        })?;

        sink.emit(output).map_err(|error| {
            debug!("for_each_invoke: sink failed on element {index}: {error}");
            DispatchError::Emit(error)
        })?;

        visited = index + 1;
    }

    debug!("for_each_invoke: `{name}` visited {visited} elements");
    Ok(())
}
