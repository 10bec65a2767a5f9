use log::{debug, trace};
use looper_core::Callable;

use crate::short_type_name;

/// Invokes `callable` on each element and collects the results.
///
/// The returned vector has the same length and order as the sequence.
///
/// # Errors
///
/// Returns the callable's error unchanged as soon as an invocation fails.
/// Later elements are not visited.
///
/// # Example
///
/// ```
/// use looper_core::Uppercase;
/// use looper_dispatch::map;
///
/// let shouted = map(["hello", "from", "x"], &Uppercase::new()).unwrap();
/// assert_eq!(shouted, ["HELLO", "FROM", "X"]);
/// ```
pub fn map<I, C>(sequence: I, callable: &C) -> Result<Vec<C::Output>, C::Error>
where
    I: IntoIterator<Item = C::Input>,
    C: Callable,
{
    let name = short_type_name::<C>();
    debug!("map: dispatching `{name}`");

    let outputs = sequence
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            trace!("map: calling `{name}` on element {index}");
            callable
                .call(element)
                .inspect_err(|error| debug!("map: `{name}` failed on element {index}: {error}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("map: `{name}` produced {} outputs", outputs.len());
    Ok(outputs)
}
