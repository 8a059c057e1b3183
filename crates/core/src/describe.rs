//! Turning failures into human-readable text.
//!
//! Every adapter that collapses an error or a panic into a `String` goes
//! through these two functions, so the same rule applies everywhere: the
//! failure's own message when it has one, otherwise a tag naming what kind
//! of failure it was.

use crate::constants::PANIC_KIND;
use std::any::{type_name, Any};
use std::fmt;

/// Describe an error by its message, falling back to its type name.
///
/// The fallback is `std::any::type_name::<E>()`, so describing a
/// `Box<dyn Error>` yields the boxed trait object's name rather than the
/// concrete type behind it. Describe the concrete value where you have it.
pub fn describe_error<E>(error: &E) -> String
where
    E: fmt::Display + ?Sized,
{
    let message = error.to_string();
    if message.is_empty() {
        type_name::<E>().to_string()
    } else {
        message
    }
}

/// Describe a panic payload as returned by `std::panic::catch_unwind`.
pub fn describe_panic(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());

    match message {
        Some(message) if !message.is_empty() => message,
        _ => PANIC_KIND.to_string(),
    }
}
