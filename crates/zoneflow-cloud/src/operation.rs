//! Long-running operation handles

use crate::error::Result;
use async_trait::async_trait;

/// A server-side operation that finishes some time after it was accepted
///
/// Zone and resource-group mutations are acknowledged by the service before
/// they complete. Providers hand back an `Operation` and the caller drives
/// it to a terminal state; the resource must not be treated as ready (or
/// gone) until `wait_until_done` returns.
#[async_trait]
pub trait Operation<T>: Send {
    /// Poll until the operation reaches a terminal state.
    ///
    /// Returns the final resource on success. Consumes the handle: an
    /// operation can only be awaited once.
    async fn wait_until_done(self: Box<Self>) -> Result<T>;
}

/// An operation that already finished, carrying its outcome
///
/// Useful for providers whose mutations complete synchronously and as a
/// building block in tests.
pub struct Completed<T>(pub Result<T>);

#[async_trait]
impl<T: Send + 'static> Operation<T> for Completed<T> {
    async fn wait_until_done(self: Box<Self>) -> Result<T> {
        self.0
    }
}
