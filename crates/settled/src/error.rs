use std::sync::Arc;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// How a failure entered the converter.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Origin {
    /// An existing error was passed through.
    Raised,
    /// A non-error value was rendered into a message.
    Thrown,
    /// The operation panicked.
    Panicked,
}

/// The failure half of an [`Outcome`](crate::Outcome).
///
/// Every failure, whatever the operation rejected with, reaches the caller as
/// this type. Clones share the same underlying error, see [`Error::ptr_eq`].
#[derive(Clone)]
pub struct Error {
    inner: Arc<Inner>,
}

struct Inner {
    message: Box<str>,
    origin: Origin,
    source: Option<BoxError>,
}

impl Error {
    /// Create an error from a message.
    pub fn new(message: impl ToString) -> Self {
        Self::from_parts(message.to_string(), Origin::Thrown, None)
    }

    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps `error`, keeping its message. Boxed [`Error`]s are unwrapped rather
    /// than nested.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Self>() {
            Ok(this) => *this,
            Err(error) => Self::from_parts(error.to_string(), Origin::Raised, Some(error)),
        }
    }

    pub(crate) fn panicked(message: String) -> Self {
        Self::from_parts(message, Origin::Panicked, None)
    }

    fn from_parts(message: String, origin: Origin, source: Option<BoxError>) -> Self {
        Self {
            inner: Arc::new(Inner {
                message: message.into(),
                origin,
                source,
            }),
        }
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    pub fn origin(&self) -> Origin {
        self.inner.origin
    }

    pub fn is_panic(&self) -> bool {
        self.origin() == Origin::Panicked
    }

    /// The original error, if this one was raised from an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner.source.as_deref()?.downcast_ref()
    }

    /// Whether both handles refer to the same error.
    pub fn ptr_eq(left: &Self, right: &Self) -> bool {
        Arc::ptr_eq(&left.inner, &right.inner)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Error");
        debug
            .field("message", &self.message())
            .field("origin", &self.origin());
        if let Some(source) = &self.inner.source {
            debug.field("source", source);
        }
        debug.finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // the wrapped error's message is already ours
        self.inner.source.as_deref()?.source()
    }
}
