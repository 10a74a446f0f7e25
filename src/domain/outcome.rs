/// Result of a gateway call that reached the vendor and got a well-formed answer.
///
/// `Ok` carries the expected value; `Fail` carries the error the gateway reported on
/// purpose (an [`SmsErrorCode`](crate::domain::SmsErrorCode) or a
/// [`ViberError`](crate::domain::ViberError)). Responses the client could not make sense
/// of never end up here; they are returned as
/// [`DecisionTelecomError::UnprocessableResponse`](crate::DecisionTelecomError::UnprocessableResponse).
///
/// There is no accessor that hands out the value of a failure or the error of a success:
/// branch with `match`, [`Outcome::is_success`], or the `Option` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T, E> {
    Ok(T),
    Fail(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the value of a successful outcome.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Borrow the error of a failed outcome.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    /// Convert into a standard [`Result`] so vendor errors can be propagated with `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Fail(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn predicates_are_complementary() {
        let ok: Outcome<i64, u8> = Outcome::Ok(1);
        assert!(ok.is_success());
        assert!(!ok.is_failure());

        let fail: Outcome<i64, u8> = Outcome::Fail(44);
        assert!(fail.is_failure());
        assert!(!fail.is_success());
    }

    #[test]
    fn accessors_only_expose_the_meaningful_side() {
        let ok: Outcome<i64, u8> = Outcome::Ok(31_885_463);
        assert_eq!(ok.value(), Some(&31_885_463));
        assert_eq!(ok.error(), None);

        let fail: Outcome<i64, u8> = Outcome::Fail(44);
        assert_eq!(fail.value(), None);
        assert_eq!(fail.error(), Some(&44));
        assert_eq!(fail.into_error(), Some(44));
    }

    #[test]
    fn map_and_map_err_touch_one_side() {
        let ok: Outcome<i64, u8> = Outcome::Ok(2);
        assert_eq!(ok.map(|v| v * 10), Outcome::Ok(20));
        assert_eq!(ok.map_err(u16::from), Outcome::Ok(2));

        let fail: Outcome<i64, u8> = Outcome::Fail(7);
        assert_eq!(fail.map(|v| v * 10), Outcome::Fail(7));
        assert_eq!(fail.map_err(|e| e + 1), Outcome::Fail(8));
    }

    #[test]
    fn converts_to_and_from_std_result() {
        let ok: Outcome<i64, u8> = Outcome::Ok(5);
        assert_eq!(ok.into_result(), Ok(5));

        let fail: Result<i64, u8> = Outcome::Fail(3).into();
        assert_eq!(fail, Err(3));

        let back: Outcome<i64, u8> = Err(9).into();
        assert_eq!(back, Outcome::Fail(9));
    }
}
