//! Extension traits for Railway-Oriented Programming with [`Attempt`].
//!
//! Provides logged extraction for attempts and an `Option` bridge, so callers
//! can leave the railway without unwrap/expect/panic.

use std::fmt::Display;

use crate::attempt::Attempt;

/// Extension trait providing logged exits from an [`Attempt`].
///
/// The core combinators never log. These helpers are the place where a
/// caller decides a failure is worth an error-level event and moves on.
pub trait AttemptExt<T, E> {
    /// Convert an Attempt to an Option, logging the failure if present.
    fn into_value_logged(self) -> Option<T>;

    /// Get the value or a default, logging the failure if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the failure without consuming the Attempt.
    fn inspect_failure<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E: Display> AttemptExt<T, E> for Attempt<T, E> {
    fn into_value_logged(self) -> Option<T> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(e) => {
                tracing::error!("Attempt failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(e) => {
                tracing::error!("Attempt failed, using default: {}", e);
                default
            }
        }
    }

    fn inspect_failure<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Attempt::Failure(ref e) = self {
            f(e);
        }
        self
    }
}

/// Extension trait bridging `Option` into an [`Attempt`].
pub trait OptionExt<T> {
    /// `Success` if present, otherwise a `Failure` built lazily by `failure`.
    fn ok_or_attempt<E, F: FnOnce() -> E>(self, failure: F) -> Attempt<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_attempt<E, F: FnOnce() -> E>(self, failure: F) -> Attempt<T, E> {
        Attempt::from_option(self, failure)
    }
}
