use thiserror::Error;

use looper_core::OverflowError;

use crate::DispatchError;

/// Errors that can occur while dispatching over a doubling sequence.
#[derive(Debug, Error, PartialEq)]
pub enum Error<CE, SE> {
    #[error("doubling sequence overflowed")]
    Overflow(#[source] OverflowError),

    #[error("dispatch failed")]
    Dispatch(#[source] DispatchError<CE, SE>),
}
