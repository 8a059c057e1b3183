//! Safe execution of described actions
//!
//! A [`SafeExecutor`] runs an action under a human-readable description,
//! reports its lifecycle through overridable hooks, and turns failure into
//! either a [`verdict_core::Error`] or a failed [`Outcome`].
//!
//! ## Architecture
//!
//! - [`config`] - [`ExecutorConfig`] and its file/env loading
//! - [`SafeExecutor`] - the hook-driven execution trait
//! - [`TracingExecutor`] - the stock implementation, reporting through `tracing`
//!
//! ## Examples
//!
//! ```rust
//! use verdict_utils::executor::{SafeExecutor, TracingExecutor};
//!
//! let executor = TracingExecutor::default();
//! let port = executor.safely_outcome("parse port", || "8080".parse::<u16>());
//! assert_eq!(port.get_or_else(80), 8080);
//! ```

pub mod config;

pub use config::ExecutorConfig;

use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{error, info, Instrument};
use verdict_core::{describe_error, describe_panic, Error, Outcome, Result};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Runs described actions and reports how they went.
///
/// The hooks default to `tracing` events; implementors override them to
/// route lifecycle reports elsewhere.
pub trait SafeExecutor {
    /// Settings that shape hook output and failure text
    fn config(&self) -> &ExecutorConfig;

    /// Called before the action runs
    fn on_start(&self, description: &str) {
        if self.config().log_lifecycle {
            info!(description = %description, "executing");
        }
    }

    /// Called after the action succeeded
    fn on_complete(&self, description: &str, elapsed: Duration) {
        if self.config().log_lifecycle {
            let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            info!(description = %description, duration_ms, "completed");
        }
    }

    /// Called after the action failed or panicked
    fn on_error(&self, description: &str, message: &str) {
        error!(description = %description, error = %message, "failed");
    }

    /// Run `action`, returning its value or an [`Error::Execution`].
    ///
    /// With `capture_panics` set, a panic becomes [`Error::Panic`].
    fn safely<T, E, A>(&self, description: &str, action: A) -> Result<T>
    where
        A: FnOnce() -> std::result::Result<T, E>,
        E: Into<BoxError> + fmt::Display,
    {
        let span = crate::tracing::execution_span(description);
        let _entered = span.enter();

        self.on_start(description);
        let started = Instant::now();

        match run_guarded(self.config().capture_panics, action) {
            Ok(Ok(value)) => {
                self.on_complete(description, started.elapsed());
                Ok(value)
            }
            Ok(Err(cause)) => {
                let error = Error::execution_with_source(description, cause);
                if let Error::Execution { message, .. } = &error {
                    self.on_error(description, message);
                }
                Err(error)
            }
            Err(panic_message) => {
                self.on_error(description, &panic_message);
                Err(Error::panic(panic_message))
            }
        }
    }

    /// Run an action that produces nothing on success
    fn safely_run<E, A>(&self, description: &str, action: A) -> Result<()>
    where
        A: FnOnce() -> std::result::Result<(), E>,
        E: Into<BoxError> + fmt::Display,
    {
        self.safely(description, action)
    }

    /// Run `action`, reporting failure as text.
    ///
    /// The text is `"<description> failed: <message>"`, or just the message
    /// when `prefix_description` is off.
    fn safely_outcome<T, E, A>(&self, description: &str, action: A) -> Outcome<T, String>
    where
        A: FnOnce() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        let span = crate::tracing::execution_span(description);
        let _entered = span.enter();

        self.on_start(description);
        let started = Instant::now();

        let message = match run_guarded(self.config().capture_panics, action) {
            Ok(Ok(value)) => {
                self.on_complete(description, started.elapsed());
                return Outcome::success(value);
            }
            Ok(Err(cause)) => describe_error(&cause),
            Err(panic_message) => panic_message,
        };

        self.on_error(description, &message);
        if self.config().prefix_description {
            Outcome::failure(format!("{description} failed: {message}"))
        } else {
            Outcome::failure(message)
        }
    }

    /// Await `future` under the same lifecycle as [`safely`](Self::safely).
    ///
    /// With `capture_panics` set, a panic while polling becomes
    /// [`Error::Panic`].
    fn safely_async<'a, T, E, Fut>(
        &'a self,
        description: &'a str,
        future: Fut,
    ) -> impl Future<Output = Result<T>> + 'a
    where
        Fut: Future<Output = std::result::Result<T, E>> + 'a,
        E: Into<BoxError> + fmt::Display,
        T: 'a,
        E: 'a,
    {
        let span = crate::tracing::execution_span(description);
        async move {
            self.on_start(description);
            let started = Instant::now();

            let settled = if self.config().capture_panics {
                AssertUnwindSafe(future)
                    .catch_unwind()
                    .await
                    .map_err(|payload| describe_panic(&*payload))
            } else {
                Ok(future.await)
            };

            match settled {
                Ok(Ok(value)) => {
                    self.on_complete(description, started.elapsed());
                    Ok(value)
                }
                Ok(Err(cause)) => {
                    let error = Error::execution_with_source(description, cause);
                    if let Error::Execution { message, .. } = &error {
                        self.on_error(description, message);
                    }
                    Err(error)
                }
                Err(panic_message) => {
                    self.on_error(description, &panic_message);
                    Err(Error::panic(panic_message))
                }
            }
        }
        .instrument(span)
    }
}

/// Run `action`, catching a panic as its described message when asked to
fn run_guarded<R>(
    capture_panics: bool,
    action: impl FnOnce() -> R,
) -> std::result::Result<R, String> {
    if capture_panics {
        panic::catch_unwind(AssertUnwindSafe(action))
            .map_err(|payload| describe_panic(&*payload))
    } else {
        Ok(action())
    }
}

/// [`SafeExecutor`] reporting through `tracing` events
#[derive(Debug, Clone, Default)]
pub struct TracingExecutor {
    config: ExecutorConfig,
}

impl TracingExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Executor configured from `VERDICT_*` environment variables
    pub fn from_env() -> Result<Self> {
        ExecutorConfig::from_env().map(Self::new)
    }
}

impl SafeExecutor for TracingExecutor {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}
