//! Dispatch [`Callable`]s over sequences.
//!
//! Every function here visits a sequence in order, invokes the callable once
//! per element, and stops at the first failure:
//!
//! - [`for_each_invoke`] — print each result on its own line
//! - [`for_each_invoke_into`] — hand each result to any [`Sink`]
//! - [`map`] — collect the results
//! - [`select`], [`select_into`] — keep the elements a predicate accepts
//! - [`doubling`] — dispatch over a doubling sequence
//!
//! [`Callable`]: looper_core::Callable

mod error;
mod for_each;
mod map;
mod select;
mod sink;

pub mod doubling;

pub use error::DispatchError;
pub use for_each::{for_each_invoke, for_each_invoke_into};
pub use map::map;
pub use select::{select, select_into};
pub use sink::{LineSink, Sink};

/// Returns a short, log-friendly name for a callable type.
///
/// Generic arguments and module paths are dropped, so
/// `looper_core::multiplier::Multiplier<i32>` becomes `Multiplier`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
