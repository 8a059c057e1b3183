//! A value wrapper for readable transformation chains

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wraps a single value so it can be transformed step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Computable<T>(T);

impl<T> Computable<T> {
    /// Wrap a value
    pub fn of(value: T) -> Self {
        Computable(value)
    }

    /// Get a reference to the wrapped value
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Extract the wrapped value
    pub fn into_value(self) -> T {
        self.0
    }

    /// Apply a function to the wrapped value
    pub fn map<R, F>(self, transformer: F) -> Computable<R>
    where
        F: FnOnce(T) -> R,
    {
        Computable(transformer(self.0))
    }

    /// Apply a function that already returns a `Computable`
    pub fn flat_map<R, F>(self, transformer: F) -> Computable<R>
    where
        F: FnOnce(T) -> Computable<R>,
    {
        transformer(self.0)
    }

    pub fn is_valid<P>(&self, validator: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        validator(&self.0)
    }

    /// Keep the value when `predicate` accepts it, otherwise replace it
    /// with `default()`
    pub fn filter<P, D>(self, predicate: P, default: D) -> Self
    where
        P: FnOnce(&T) -> bool,
        D: FnOnce() -> T,
    {
        if predicate(&self.0) {
            self
        } else {
            Computable(default())
        }
    }

    /// Fold the wrapped value into an accumulator
    pub fn reduce<R, A>(self, initial: R, accumulator: A) -> R
    where
        A: FnOnce(R, T) -> R,
    {
        accumulator(initial, self.0)
    }

    /// Combine with another computable value
    pub fn combine<U, R, C>(self, other: Computable<U>, combiner: C) -> Computable<R>
    where
        C: FnOnce(T, U) -> R,
    {
        Computable(combiner(self.0, other.0))
    }

    /// Apply a side effect without changing the value
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        action(&self.0);
        self
    }

    /// Move into an [`Outcome`], failing with `on_invalid(value)` when
    /// `predicate` rejects the value
    pub fn validate<F, P, I>(self, predicate: P, on_invalid: I) -> Outcome<T, F>
    where
        P: FnOnce(&T) -> bool,
        I: FnOnce(T) -> F,
    {
        Outcome::success(self.0).validate(predicate, on_invalid)
    }
}

impl<T> Computable<Option<T>> {
    /// The wrapped value when present, otherwise `other`
    pub fn or_else(self, other: T) -> T {
        self.0.unwrap_or(other)
    }
}

impl<T> From<T> for Computable<T> {
    fn from(value: T) -> Self {
        Computable(value)
    }
}

impl<T: fmt::Display> fmt::Display for Computable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Computable[{}]", self.0)
    }
}
