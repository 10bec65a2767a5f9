use log::{debug, trace};
use looper_core::Callable;

use crate::{DispatchError, Sink, short_type_name};

/// Keeps the elements for which `predicate` returns `true`.
///
/// The kept elements stay in their original relative order.
///
/// # Errors
///
/// Returns the predicate's error unchanged as soon as an invocation fails.
/// Later elements are not visited.
///
/// # Example
///
/// ```
/// use looper_core::Palindrome;
/// use looper_dispatch::select;
///
/// let words = ["hello", "mom", "bob", "monday"];
/// assert_eq!(select(words, &Palindrome::new()).unwrap(), ["mom", "bob"]);
/// ```
pub fn select<I, P>(sequence: I, predicate: &P) -> Result<Vec<P::Input>, P::Error>
where
    I: IntoIterator<Item = P::Input>,
    P: Callable<Output = bool>,
    P::Input: Clone,
{
    let name = short_type_name::<P>();
    debug!("select: dispatching `{name}`");

    let mut selected = Vec::new();
    for (index, element) in sequence.into_iter().enumerate() {
        trace!("select: calling `{name}` on element {index}");

        let keep = predicate
            .call(element.clone())
            .inspect_err(|error| debug!("select: `{name}` failed on element {index}: {error}"))?;

        if keep {
            selected.push(element);
        }
    }

    debug!("select: `{name}` kept {} elements", selected.len());
    Ok(selected)
}

/// Keeps the elements for which `predicate` returns `true`, emitting each one
/// to `sink` as soon as it is accepted.
///
/// The returned vector holds the same elements the sink received.
///
/// # Errors
///
/// Returns [`DispatchError::Call`] if the predicate fails or
/// [`DispatchError::Emit`] if the sink fails. Dispatch stops at the first
/// failure.
pub fn select_into<I, P, S>(
    sequence: I,
    predicate: &P,
    sink: &mut S,
) -> Result<Vec<P::Input>, DispatchError<P::Error, S::Error>>
where
    I: IntoIterator<Item = P::Input>,
    P: Callable<Output = bool>,
    P::Input: Clone,
    S: Sink<P::Input>,
{
    let name = short_type_name::<P>();
    debug!("select_into: dispatching `{name}`");

    let mut selected = Vec::new();
    for (index, element) in sequence.into_iter().enumerate() {
        trace!("select_into: calling `{name}` on element {index}");

        let keep = predicate.call(element.clone()).map_err(|error| {
            debug!("select_into: `{name}` failed on element {index}: {error}");
            DispatchError::Call(error)
        })?;

        if keep {
            sink.emit(element.clone()).map_err(|error| {
                debug!("select_into: sink failed on element {index}: {error}");
                DispatchError::Emit(error)
            })?;
            selected.push(element);
        }
    }

    debug!("select_into: `{name}` kept {} elements", selected.len());
    Ok(selected)
}
