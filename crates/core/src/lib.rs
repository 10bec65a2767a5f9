//! Core traits and types for Looper.
//!
//! This crate defines the callable side of callback-driven iteration:
//!
//! - [`Callable`] — a value that maps a typed input to a typed output
//! - [`from_fn`], [`try_from_fn`] — wrap closures as callables, capturing
//!   their environment at creation
//! - [`Multiplier`], [`CheckedMultiplier`], [`Square`] — numeric callables
//! - [`Palindrome`], [`Uppercase`] — text callables
//!
//! Dispatching a callable over a sequence lives in `looper-dispatch`.

mod callable;
mod multiplier;
mod text;

pub use callable::{Callable, from_fn, try_from_fn};
pub use multiplier::{CheckedMultiplier, Multiplier, OverflowError, Square};
pub use text::{Palindrome, Uppercase};
