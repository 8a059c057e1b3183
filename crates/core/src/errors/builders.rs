//! Builder methods for creating errors with context

use super::types::Error;
use crate::describe::describe_error;
use std::fmt;
use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

impl Error {
    /// Create an invalid state error for a contract violation
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState {
            message: message.into(),
        }
    }

    /// Create an execution error without an underlying cause
    #[must_use]
    pub fn execution(description: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Execution {
            description: description.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an execution error for `description` caused by `source`.
    ///
    /// The message follows the message-or-kind rule applied to the cause.
    #[must_use]
    pub fn execution_with_source<E>(description: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError> + fmt::Display,
    {
        Error::Execution {
            description: description.into(),
            message: describe_error(&source),
            source: Some(source.into()),
        }
    }

    /// Carry any error through the verdict error channel.
    ///
    /// An error that already is a verdict [`Error`] is returned as-is;
    /// anything else becomes [`Error::Wrapped`].
    #[must_use]
    pub fn wrap<E>(error: E) -> Self
    where
        E: Into<BoxError> + fmt::Display,
    {
        let message = describe_error(&error);
        match error.into().downcast::<Error>() {
            Ok(own) => *own,
            Err(foreign) => Error::Wrapped {
                message,
                source: foreign,
            },
        }
    }

    /// Create an error for a captured panic
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// True when this error reports a wrong-variant access
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::InvalidState { .. })
    }
}
