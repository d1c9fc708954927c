use std::{convert::Infallible, future::Future, panic::AssertUnwindSafe};

use futures_util::FutureExt as _;

use crate::{Config, Error, Outcome, Rejection};

/// Await `operation` and report how it settled.
///
/// Uses [`Config::default`], see [`settle_with`].
pub async fn settle<F, T, E>(operation: F) -> Outcome<T>
where
    F: Future<Output = Result<T, E>>,
    E: Rejection,
{
    settle_with(Config::default(), operation).await
}

/// Await an operation that cannot fail on its own. It can still panic.
pub async fn settle_value<F, T>(operation: F) -> Outcome<T>
where
    F: Future<Output = T>,
{
    settle_with(Config::default(), operation.map(Ok::<_, Infallible>)).await
}

/// Await `operation` and report how it settled.
///
/// An `Err` becomes [`Outcome::Failure`] through [`Rejection::into_error`]. A
/// panic inside `operation` becomes a failure too, unless
/// [`Config::with_catch_panics`] turned that off.
pub async fn settle_with<F, T, E>(config: Config, operation: F) -> Outcome<T>
where
    F: Future<Output = Result<T, E>>,
    E: Rejection,
{
    let settled = if config.catch_panics {
        match AssertUnwindSafe(operation).catch_unwind().await {
            Ok(result) => result.map_err(Rejection::into_error),
            Err(payload) => {
                let message = crate::util::panic_message(&*payload);
                log::trace!("captured a panic from the operation: {message}");
                Err(Error::panicked(message))
            }
        }
    } else {
        operation.await.map_err(Rejection::into_error)
    };

    if let (Err(error), Some(level)) = (&settled, config.failure_log) {
        log::log!(level, "operation failed: {error}");
    }

    Outcome::from(settled)
}

/// [`settle`] and [`settle_with`] as methods on any fallible future.
pub trait SettleExt: Future + Sized {
    fn settle<T, E>(self) -> impl Future<Output = Outcome<T>>
    where
        Self: Future<Output = Result<T, E>>,
        E: Rejection,
    {
        settle(self)
    }

    fn settle_with<T, E>(self, config: Config) -> impl Future<Output = Outcome<T>>
    where
        Self: Future<Output = Result<T, E>>,
        E: Rejection,
    {
        settle_with(config, self)
    }
}

impl<F> SettleExt for F where F: Future {}
