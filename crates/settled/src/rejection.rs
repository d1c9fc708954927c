use std::{borrow::Cow, convert::Infallible};

use crate::Error;

/// Something an operation can fail with.
///
/// Values that already are errors keep their message (and [`Error`] keeps its
/// identity). Anything else is rendered to text and becomes the message of a
/// new [`Error`].
pub trait Rejection: Send + 'static {
    fn into_error(self) -> Error;
}

impl Rejection for Error {
    #[inline]
    fn into_error(self) -> Error {
        self
    }
}

impl Rejection for Box<dyn std::error::Error + Send + Sync> {
    fn into_error(self) -> Error {
        Error::from_boxed(self)
    }
}

impl Rejection for Infallible {
    fn into_error(self) -> Error {
        match self {}
    }
}

#[cfg(feature = "anyhow")]
impl Rejection for anyhow::Error {
    fn into_error(self) -> Error {
        Error::from_boxed(self.into())
    }
}

/// Pass any error type through, keeping its message and the value itself.
#[derive(Debug)]
pub struct Raised<E>(pub E);

impl<E> Rejection for Raised<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_error(self) -> Error {
        Error::from_std(self.0)
    }
}

/// Fail with a value that isn't an error, using its `Display` output as the message.
#[derive(Debug)]
pub struct Thrown<T>(pub T);

impl<T> Rejection for Thrown<T>
where
    T: std::fmt::Display + Send + 'static,
{
    fn into_error(self) -> Error {
        thrown(&self.0)
    }
}

/// Like [`Thrown`], for structured data that only has a `Debug` rendering.
#[derive(Debug)]
pub struct ThrownDebug<T>(pub T);

impl<T> Rejection for ThrownDebug<T>
where
    T: std::fmt::Debug + Send + 'static,
{
    fn into_error(self) -> Error {
        thrown(&format_args!("{:?}", self.0))
    }
}

fn thrown(value: &dyn std::fmt::Display) -> Error {
    let error = Error::new(value);
    log::trace!("normalized a non-error rejection: {error}");
    error
}

macro_rules! raised {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Rejection for $ty {
                fn into_error(self) -> Error {
                    Error::from_std(self)
                }
            }
        )*
    };
}

macro_rules! thrown {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Rejection for $ty {
                fn into_error(self) -> Error {
                    thrown(&self)
                }
            }
        )*
    };
}

raised! {
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    tokio::time::error::Elapsed,
}

thrown! {
    String, &'static str, Box<str>, Cow<'static, str>,
    char, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}
