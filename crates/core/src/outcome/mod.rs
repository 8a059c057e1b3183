//! A two-variant outcome type and its combinator algebra
//!
//! [`Outcome`] holds exactly one of a success value or a failure value.
//! Every combinator consumes the outcome and hands back a new one; nothing
//! is ever mutated in place, so an `Outcome` can be shared across threads
//! whenever its payloads can.
//!
//! Closures passed to combinators are called directly. A panic inside one
//! propagates to the caller untouched.
//!
//! ## Key Components
//!
//! - **[`Outcome`]**: the `Success` / `Failure` sum type.
//! - **[`sequence`]** and **[`traverse`]**: lift an ordered collection of
//!   outcomes into an outcome of a `Vec`, stopping at the first failure.

mod collect;

pub use collect::{sequence, traverse};

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a success value of type `S` or a failure value of type `F`
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<S, F> {
    /// The operation produced a value
    Success(S),
    /// The operation failed with an error
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Build a successful outcome
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Build a failed outcome
    pub fn failure(error: F) -> Self {
        Outcome::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure`, with the error's `Debug` output in the
    /// message. Calling this without checking the variant is a bug in the
    /// caller; use [`fold`](Self::fold), [`get_or_else`](Self::get_or_else)
    /// or [`try_get`](Self::try_get) when either variant is expected.
    #[track_caller]
    pub fn get(self) -> S
    where
        F: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::get()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Take the failure value.
    ///
    /// # Panics
    ///
    /// Panics on a `Success`, with the value's `Debug` output in the message.
    #[track_caller]
    pub fn get_error(self) -> F
    where
        S: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::get_error()` on a `Success` value: {value:?}")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Take the success value, reporting a wrong-variant access as
    /// [`Error::InvalidState`] instead of panicking.
    pub fn try_get(self) -> Result<S>
    where
        F: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(Error::invalid_state(format!(
                "cannot get value from a failure outcome: {error:?}"
            ))),
        }
    }

    /// Take the failure value, reporting a wrong-variant access as
    /// [`Error::InvalidState`] instead of panicking.
    pub fn try_get_error(self) -> Result<F>
    where
        S: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => Err(Error::invalid_state(format!(
                "cannot get error from a success outcome: {value:?}"
            ))),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn success_value(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_value(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrow both payloads without consuming the outcome
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Collapse the outcome by applying the function matching its variant
    pub fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(F) -> R,
        OnSuccess: FnOnce(S) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value, leaving a failure untouched
    pub fn map<T, M>(self, mapper: M) -> Outcome<T, F>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(mapper(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain an outcome-producing step onto a success.
    ///
    /// A failure short-circuits: `mapper` is never called.
    pub fn flat_map<T, M>(self, mapper: M) -> Outcome<T, F>
    where
        M: FnOnce(S) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => mapper(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure value, leaving a success untouched
    pub fn map_failure<E, M>(self, mapper: M) -> Outcome<S, E>
    where
        M: FnOnce(F) -> E,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    pub fn get_or_else(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Take the success value or compute a fallback.
    ///
    /// `supplier` runs only for a failure.
    pub fn get_or_else_get<P>(self, supplier: P) -> S
    where
        P: FnOnce() -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => supplier(),
        }
    }

    /// Replace a failure with whatever `handler` returns, which may itself
    /// be another failure. A success is returned as-is and `handler` is not
    /// called.
    pub fn recover<H>(self, handler: H) -> Self
    where
        H: FnOnce(F) -> Self,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => handler(error),
        }
    }

    /// Turn a success into a failure when `predicate` rejects its value.
    ///
    /// Failures pass through without `predicate` being consulted.
    pub fn validate<P, I>(self, predicate: P, on_invalid: I) -> Self
    where
        P: FnOnce(&S) -> bool,
        I: FnOnce(S) -> F,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(on_invalid(value))
                }
            }
            failure @ Outcome::Failure(_) => failure,
        }
    }

    /// Observe whichever payload is present
    pub fn peek<O>(self, observer: O) -> Self
    where
        O: FnOnce(Outcome<&S, &F>),
    {
        observer(self.as_ref());
        self
    }

    pub fn peek_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&S),
    {
        if let Outcome::Success(value) = &self {
            action(value);
        }
        self
    }

    pub fn peek_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&F),
    {
        if let Outcome::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Convert into the equivalent `std::result::Result`
    pub fn into_result(self) -> std::result::Result<S, F> {
        self.into()
    }
}

impl<S, F> From<std::result::Result<S, F>> for Outcome<S, F> {
    fn from(result: std::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for std::result::Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success[{value}]"),
            Outcome::Failure(error) => write!(f, "Failure[{error}]"),
        }
    }
}
