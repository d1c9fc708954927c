use crate::{Error, Rejection};

/// How an operation settled: with a value, or with an [`Error`].
///
/// Exactly one of the two is ever present. [`Outcome::into_tuple`] gives the
/// `(error, value)` pair form for callers that prefer it.
#[must_use = "an `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    Failure(Error),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(..))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(..) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }

    pub fn failure(self) -> Option<Error> {
        match self {
            Self::Success(..) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// `(None, Some(value))` on success, `(Some(error), None)` on failure.
    pub fn into_tuple(self) -> (Option<Error>, Option<T>) {
        match self {
            Self::Success(value) => (None, Some(value)),
            Self::Failure(error) => (Some(error), None),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        self.into()
    }

    pub fn map<U>(self, map: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(map(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Rejection,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(rejection) => Self::Failure(rejection.into_error()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_shape() {
        let outcome = Outcome::from(Ok::<_, Error>(42));
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.error().is_none());

        let (error, data) = outcome.into_tuple();
        assert!(error.is_none());
        assert_eq!(data, Some(42));
    }

    #[test]
    fn outcome_failure_shape() {
        let expected = Error::new("Test error");
        let outcome = Outcome::<u32>::from(Err(expected.clone()));
        assert!(outcome.is_failure());
        assert!(outcome.value().is_none());
        assert!(Error::ptr_eq(outcome.error().unwrap(), &expected));

        let (error, data) = outcome.into_tuple();
        assert!(Error::ptr_eq(&error.unwrap(), &expected));
        assert!(data.is_none());
    }

    #[test]
    fn outcome_tuple_has_exactly_one_slot() {
        let outcomes = [
            Outcome::Success("value"),
            Outcome::from(Err::<&str, _>("string error")),
            Outcome::Failure(Error::new("Immediate fail")),
        ];

        for outcome in outcomes {
            let (error, data) = outcome.into_tuple();
            assert!(error.is_some() ^ data.is_some());
        }
    }

    #[test]
    fn outcome_result_conversions() {
        assert_eq!(Outcome::Success(1).into_result().unwrap(), 1);

        let result: Result<u8, Error> = Outcome::from(Err::<u8, _>(7_i32)).into();
        assert_eq!(result.unwrap_err().message(), "7");

        assert_eq!(Outcome::Success(2).success(), Some(2));
        assert!(Outcome::<u8>::Failure(Error::new("x")).success().is_none());
        assert_eq!(
            Outcome::<u8>::Failure(Error::new("x")).failure().unwrap().message(),
            "x"
        );
    }

    #[test]
    fn outcome_map_and_as_ref() {
        let outcome = Outcome::Success(String::from("data"));
        assert_eq!(outcome.as_ref().map(String::len).success(), Some(4));
        assert_eq!(outcome.success().as_deref(), Some("data"));

        let expected = Error::new("kept");
        let mapped = Outcome::<u8>::Failure(expected.clone()).map(|n| n + 1);
        assert!(Error::ptr_eq(&mapped.failure().unwrap(), &expected));
    }
}
