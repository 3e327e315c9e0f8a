//! Success/Failure Outcomes
//!
//! [`Outcome`] represents a value or the error that prevented it, with the
//! Map/FlatMap family of combinators layered on top. The error parameter
//! defaults to [`FxError`] so the collection utilities can return a concrete
//! type, while callers threading their own error types stay free to do so.
//!
//! Two contracts run through everything here:
//!
//! - **Short-circuit propagation**: a combinator never invokes the supplied
//!   function on the failure path; the existing error passes through
//!   unchanged.
//! - **Cancellation precedence**: the `_ctx` variants sample their
//!   [`Signal`] once at entry and short-circuit on a dead signal *before*
//!   looking at the container, so cancellation wins even over an upstream
//!   failure.
//!
//! [`Outcome::unwrap`] on a Failure is a contract violation and panics. It is
//! deliberately not a recoverable error; callers wanting totality use
//! [`Outcome::unwrap_or`], [`Outcome::unwrap_or_else`] or
//! [`Outcome::split`].

use std::fmt;

use crate::error::FxError;
use crate::optional::Optional;
use crate::signal::Signal;

/// A success carrying `T`, or a failure carrying `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = FxError> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps a failure.
    pub fn failure(err: E) -> Self {
        Outcome::Failure(err)
    }

    /// True when this outcome holds a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True when this outcome holds an error.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a Failure. That situation is a programmer
    /// error (the caller skipped [`is_failure`](Outcome::is_failure) or a
    /// total accessor), not a recoverable condition.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(err) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {err:?}")
            }
        }
    }

    /// Returns the success value, or `default` on failure. Total.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error. Total.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(err) => f(err),
        }
    }

    /// Borrows the carried error, or Absent on success.
    pub fn as_error(&self) -> Optional<&E> {
        match self {
            Outcome::Success(_) => Optional::Absent,
            Outcome::Failure(err) => Optional::Present(err),
        }
    }

    /// Consumes the outcome and returns the carried error, or Absent.
    pub fn into_error(self) -> Optional<E> {
        match self {
            Outcome::Success(_) => Optional::Absent,
            Outcome::Failure(err) => Optional::Present(err),
        }
    }

    /// Dual-return ergonomics: `(value, None)` on success,
    /// `(T::default(), Some(err))` on failure. The defaulted payload is a
    /// placeholder, not a meaningful result; callers must check the error
    /// half first.
    pub fn split(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => (value, None),
            Outcome::Failure(err) => (T::default(), Some(err)),
        }
    }

    /// Applies `f` to the success value. Failure passes through unchanged and
    /// `f` is not invoked.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Applies `f`, which itself returns an [`Outcome`], to the success
    /// value. The result is `f`'s output directly, never double-wrapped.
    /// Failure passes through unchanged and `f` is not invoked.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: From<FxError>,
{
    /// [`map`](Outcome::map) gated on `signal`: a dead signal short-circuits
    /// to its cancellation error before the container is inspected.
    pub fn map_ctx<U, F>(self, signal: &Signal, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        if let Some(err) = signal.err() {
            return Outcome::Failure(err.into());
        }
        self.map(f)
    }

    /// [`flat_map`](Outcome::flat_map) gated on `signal`, with the same
    /// cancellation-first precedence as [`map_ctx`](Outcome::map_ctx).
    pub fn flat_map_ctx<U, F>(self, signal: &Signal, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        if let Some(err) = signal.err() {
            return Outcome::Failure(err.into());
        }
        self.flat_map(f)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

/// Dual-return flavour of [`Outcome::flat_map`] for callers working with
/// `(value, error)` pairs instead of the wrapper: a pre-existing `err` is
/// returned as `(U::default(), err)` without invoking `f`; otherwise `f`'s
/// raw pair is returned as-is.
pub fn flat_map_err<T, U, E, F>(value: T, err: Option<E>, f: F) -> (U, Option<E>)
where
    U: Default,
    F: FnOnce(T) -> (U, Option<E>),
{
    if err.is_some() {
        return (U::default(), err);
    }
    f(value)
}

/// [`flat_map_err`] gated on `signal`: a dead signal yields its cancellation
/// error, taking precedence over any upstream `err`.
pub fn flat_map_err_ctx<T, U, E, F>(signal: &Signal, value: T, err: Option<E>, f: F) -> (U, Option<E>)
where
    U: Default,
    E: From<FxError>,
    F: FnOnce(T) -> (U, Option<E>),
{
    if let Some(cancel) = signal.err() {
        return (U::default(), Some(cancel.into()));
    }
    flat_map_err(value, err, f)
}
