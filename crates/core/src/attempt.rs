//! The `Attempt` container and its combinators.
//!
//! An [`Attempt`] is the outcome of a fallible computation held as a value:
//! either a produced value ([`Attempt::Success`]) or a captured failure
//! ([`Attempt::Failure`]). Once a failure is inside the container it is data,
//! not control flow: every combinator short-circuits on `Failure` and moves
//! the same failure value through untouched.
//!
//! Failure-signalling code (a closure returning `Result`) is absorbed at
//! exactly three places: [`Attempt::from_fn`], [`Attempt::map`] (and the
//! plain-fallible form of [`Attempt::flat_map`]), and [`Attempt::perform`].

use either::Either;

/// The outcome of a fallible computation.
///
/// Exactly one variant is active. No operation mutates an existing instance;
/// combinators take `self` by value and hand ownership of the payload to the
/// container they return.
///
/// # Examples
///
/// ```
/// use attempt::Attempt;
///
/// let parsed: Attempt<i32, std::num::ParseIntError> = Attempt::from_fn(|| "21".parse::<i32>());
/// let doubled = parsed.map(|n| Ok(n * 2));
/// assert_eq!(doubled.value(), Some(&42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Attempt` may hold a failure, which should be handled"]
pub enum Attempt<T, E> {
    /// A produced value.
    Success(T),
    /// A captured failure.
    Failure(E),
}

/// Conversion into an [`Attempt`].
///
/// Implemented for `Attempt` itself and for `std::result::Result`, which is
/// what lets [`Attempt::flat_map`] accept both a container-returning transform
/// and an ordinary fallible one.
pub trait IntoAttempt {
    /// Success payload.
    type Value;
    /// Failure payload.
    type Error;

    /// Convert `self` into an `Attempt`.
    fn into_attempt(self) -> Attempt<Self::Value, Self::Error>;
}

impl<T, E> IntoAttempt for Attempt<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_attempt(self) -> Self {
        self
    }
}

impl<T, E> IntoAttempt for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_attempt(self) -> Attempt<T, E> {
        match self {
            Ok(value) => Attempt::Success(value),
            Err(error) => Attempt::Failure(error),
        }
    }
}

impl<T, E> Attempt<T, E> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Run `computation` once, right now, and capture its outcome.
    ///
    /// An `Err` returned by the computation becomes `Failure`; an `Ok`
    /// becomes `Success`.
    pub fn from_fn<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        computation().into_attempt()
    }

    /// Wrap a known value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a known failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// `Success(value)` if present, otherwise `Failure(otherwise())`.
    ///
    /// `otherwise` is only called when `value` is `None`.
    pub fn from_option<F>(value: Option<T>, otherwise: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(otherwise()),
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Returns `true` if this is a `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The held value, or `None` on failure.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The held failure, or `None` on success.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the attempt, keeping only the value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume the attempt, keeping only the failure.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Attempt<&T, &E> {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    // ------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------

    /// Apply a fallible `transform` to the value.
    ///
    /// On `Failure` the transform is never called and the failure is moved
    /// through as-is. If the transform returns `Err`, the result is a
    /// `Failure` holding that error and the original value is dropped.
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let ok: Attempt<i32, String> = Attempt::success(5);
    /// assert_eq!(ok.map(|n| Ok(n * 2)), Attempt::Success(10));
    ///
    /// let rejected = Attempt::<i32, String>::success(5).map(|_| Err::<i32, _>("nope".to_owned()));
    /// assert_eq!(rejected, Attempt::Failure("nope".to_owned()));
    /// ```
    pub fn map<U, F>(self, transform: F) -> Attempt<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => transform(value).into_attempt(),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Chain another fallible step onto the value.
    ///
    /// `transform` may return either an `Attempt` or a plain `Result`. With a
    /// `Result`-returning transform this is exactly [`Attempt::map`].
    pub fn flat_map<R, F>(self, transform: F) -> Attempt<R::Value, E>
    where
        F: FnOnce(T) -> R,
        R: IntoAttempt<Error = E>,
    {
        match self {
            Self::Success(value) => transform(value).into_attempt(),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Pair this value with the value of `other`.
    ///
    /// `other` is only evaluated if `self` is a `Success`, so a failure on
    /// the receiver always wins.
    pub fn zip<U, F>(self, other: F) -> Attempt<(T, U), E>
    where
        F: FnOnce() -> Attempt<U, E>,
    {
        self.zip_with(other, |value, other_value| (value, other_value))
    }

    /// Like [`Attempt::zip`], but combine the two values with `zipper`.
    pub fn zip_with<U, R, F, Z>(self, other: F, zipper: Z) -> Attempt<R, E>
    where
        F: FnOnce() -> Attempt<U, E>,
        Z: FnOnce(T, U) -> R,
    {
        match self {
            Self::Success(value) => match other() {
                Attempt::Success(other_value) => Attempt::Success(zipper(value, other_value)),
                Attempt::Failure(error) => Attempt::Failure(error),
            },
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Run `effect` against the value for its side effect only.
    ///
    /// The value is never changed. An `Err` from the effect turns the
    /// outcome into a `Failure`; otherwise `self` is returned as it was.
    pub fn perform<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match self {
            Self::Success(value) => match effect(&value) {
                Ok(()) => Self::Success(value),
                Err(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Replace a failure with the outcome of `recovery`.
    ///
    /// A `Success` is returned unchanged and `recovery` is never called. On
    /// `Failure` the original error is dropped; capture it first if it is
    /// still needed.
    pub fn fallback<F>(self, recovery: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(_) => recovery(),
        }
    }

    /// Transform the failure, leaving a success untouched.
    pub fn map_failure<E2, F>(self, transform: F) -> Attempt<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(error) => Attempt::Failure(transform(error)),
        }
    }

    // ------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------

    /// The value, or `default` on failure.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The value, or whatever `recover` makes of the failure.
    pub fn value_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    /// Convert into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the held failure as `Err`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Convert into an `Either` with the failure on the left.
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_attempt()
    }
}

impl<T, E> From<Attempt<T, E>> for Result<T, E> {
    fn from(attempt: Attempt<T, E>) -> Self {
        attempt.into_result()
    }
}

impl<T, E> From<Either<E, T>> for Attempt<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Left(error) => Self::Failure(error),
            Either::Right(value) => Self::Success(value),
        }
    }
}

impl<T, E> From<Attempt<T, E>> for Either<E, T> {
    fn from(attempt: Attempt<T, E>) -> Self {
        attempt.into_either()
    }
}
