//! Extension methods for fallible closures
//!
//! [`SafeCall`] is implemented for every `FnOnce() -> Result<T, E>`, so any
//! closure that can fail picks up these conversions without wrapping.

use std::fmt;
use verdict_core::{describe_error, Error, Outcome};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Conversions for a deferred fallible computation
pub trait SafeCall<T, E>: FnOnce() -> Result<T, E> + Sized {
    /// Run the call, carrying any error into the verdict error channel.
    ///
    /// A `verdict_core::Error` is returned unchanged; anything else becomes
    /// [`Error::Wrapped`].
    fn get_or_raise(self) -> verdict_core::Result<T>
    where
        E: Into<BoxError> + fmt::Display,
    {
        self().map_err(Error::wrap)
    }

    /// Run the call, falling back to `default` on error
    fn get_or_else(self, default: T) -> T {
        self().unwrap_or(default)
    }

    /// Run the call, keeping the error as the failure payload
    fn to_outcome(self) -> Outcome<T, E> {
        self().into()
    }

    /// Run the call, describing the error as text
    fn to_outcome_with_message(self) -> Outcome<T, String>
    where
        E: fmt::Display,
    {
        self.to_outcome().map_failure(|e| describe_error(&e))
    }
}

impl<T, E, C> SafeCall<T, E> for C where C: FnOnce() -> Result<T, E> {}

/// Runnable form of [`SafeCall`] for calls that produce nothing
pub trait SafeRun<E>: SafeCall<(), E> {
    /// Run the call for its side effects
    fn execute(self) -> verdict_core::Result<()>
    where
        E: Into<BoxError> + fmt::Display,
    {
        self.get_or_raise()
    }
}

impl<E, C> SafeRun<E> for C where C: FnOnce() -> Result<(), E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    fn read_setting(present: bool) -> impl FnOnce() -> Result<String, io::Error> {
        move || {
            if present {
                Ok("enabled".to_string())
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "setting missing"))
            }
        }
    }

    #[test]
    fn test_get_or_raise_wraps_foreign_errors() {
        assert_eq!(read_setting(true).get_or_raise().unwrap(), "enabled");

        let err = read_setting(false).get_or_raise().unwrap_err();
        assert!(matches!(err, Error::Wrapped { .. }));
        assert_eq!(err.to_string(), "setting missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_get_or_raise_keeps_verdict_errors() {
        let call = || -> verdict_core::Result<u8> { Err(Error::configuration("no port")) };
        let err = call.get_or_raise().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(read_setting(false).get_or_else("disabled".to_string()), "disabled");
    }

    #[test]
    fn test_to_outcome_variants() {
        assert_eq!(
            read_setting(true).to_outcome().map_failure(|e| e.kind()),
            Outcome::success("enabled".to_string())
        );
        assert_eq!(
            read_setting(false).to_outcome_with_message(),
            Outcome::failure("setting missing".to_string())
        );
    }

    #[test]
    fn test_execute_runnable() {
        let mut log = Vec::new();
        let step = || -> Result<(), io::Error> {
            log.push("flushed");
            Ok(())
        };
        step.execute().unwrap();
        assert_eq!(log, vec!["flushed"]);

        let failing = || -> Result<(), io::Error> { Err(io::Error::other("disk full")) };
        assert_eq!(failing.execute().unwrap_err().to_string(), "disk full");
    }
}
