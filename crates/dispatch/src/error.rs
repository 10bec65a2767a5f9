use thiserror::Error;

/// Errors that can stop a sink-driven dispatch.
///
/// The callable's own error is carried unchanged in [`DispatchError::Call`].
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError<CE, SE> {
    /// The callable failed on an element.
    #[error("callable failed")]
    Call(#[source] CE),

    /// The sink rejected a result.
    #[error("failed to emit result")]
    Emit(#[source] SE),
}
