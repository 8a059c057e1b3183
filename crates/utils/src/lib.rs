//! Adapters, safe execution and tracing setup for verdict
//!
//! This crate wraps fallible code so that it reports an
//! [`Outcome`](verdict_core::Outcome) or a [`verdict_core::Error`] instead of
//! propagating whatever it failed with. None of it is needed to use the
//! outcome type itself.

pub mod attempt;
pub mod executor;
pub mod safe_call;
pub mod tracing;

pub use self::attempt::*;
pub use self::executor::{ExecutorConfig, SafeExecutor, TracingExecutor};
pub use self::safe_call::{SafeCall, SafeRun};
pub use self::tracing::{execution_span, init as init_tracing};
