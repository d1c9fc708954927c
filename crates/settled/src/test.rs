//! Ready-made operations for exercising the converter.
use std::{
    convert::Infallible,
    future::{ready, Future, Ready},
    time::Duration,
};

/// An operation that has already produced `value`.
pub fn resolve<T>(value: T) -> Ready<Result<T, Infallible>> {
    ready(Ok(value))
}

/// An operation that has already failed with `rejection`.
pub fn reject<T, E>(rejection: E) -> Ready<Result<T, E>> {
    ready(Err(rejection))
}

/// An operation that produces `value` once `delay` has passed.
pub fn resolve_after<T>(
    delay: Duration,
    value: T,
) -> impl Future<Output = Result<T, Infallible>> + Send
where
    T: Send,
{
    async move {
        tokio::time::sleep(delay).await;
        Ok(value)
    }
}

/// An operation that fails with `rejection` once `delay` has passed.
pub fn reject_after<T, E>(
    delay: Duration,
    rejection: E,
) -> impl Future<Output = Result<T, E>> + Send
where
    T: Send,
    E: Send,
{
    async move {
        tokio::time::sleep(delay).await;
        Err(rejection)
    }
}
