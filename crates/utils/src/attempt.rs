//! Adapters that turn fallible code into [`Outcome`] values
//!
//! Each function runs an action that may fail and reports the result as an
//! outcome instead of an `Err` to propagate. Wherever the failure is
//! collapsed into a `String`, the text follows the message-or-kind rule of
//! [`describe_error`]: the error's message, or its type name when the
//! message is empty.

use std::fmt;
use std::panic::{self, UnwindSafe};
use verdict_core::{describe_error, describe_panic, Outcome};

/// Run `action`, describing any error as text.
///
/// An empty message falls back to the error's static type, so an error
/// behind `anyhow::Error` or `Box<dyn Error>` is named after the wrapper
/// rather than the concrete kind it carries.
pub fn attempt<T, E, A>(action: A) -> Outcome<T, String>
where
    A: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    attempt_with(action, |e| describe_error(&e))
}

/// Run `action`, keeping any error as-is
pub fn attempt_raw<T, E, A>(action: A) -> Outcome<T, E>
where
    A: FnOnce() -> Result<T, E>,
{
    action().into()
}

/// Run `action`, converting any error with `error_mapper`
pub fn attempt_with<T, E, F, A, M>(action: A, error_mapper: M) -> Outcome<T, F>
where
    A: FnOnce() -> Result<T, E>,
    M: FnOnce(E) -> F,
{
    attempt_raw(action).map_failure(error_mapper)
}

/// Run an action that produces nothing on success
pub fn attempt_run<E, A>(action: A) -> Outcome<(), String>
where
    A: FnOnce() -> Result<(), E>,
    E: fmt::Display,
{
    attempt(action)
}

/// Defer [`attempt`]: `action` runs only when the returned closure is called
pub fn lazy<T, E, A>(action: A) -> impl FnOnce() -> Outcome<T, String>
where
    A: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    move || attempt(action)
}

/// Run `action`, falling back to `default` on any error
pub fn get_or_default<T, E, A>(action: A, default: T) -> T
where
    A: FnOnce() -> Result<T, E>,
{
    action().unwrap_or(default)
}

/// Run `action`, discarding any error
pub fn get_or_none<T, E, A>(action: A) -> Option<T>
where
    A: FnOnce() -> Result<T, E>,
{
    action().ok()
}

/// Run an infallible-looking action, turning a panic into a failure.
///
/// The panic hook still runs, so the panic message is printed as usual.
pub fn attempt_unwind<T, A>(action: A) -> Outcome<T, String>
where
    A: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(action)
        .map_err(|payload| describe_panic(&*payload))
        .into()
}
