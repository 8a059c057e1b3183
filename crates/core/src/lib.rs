//! Core types and errors for `verdict`.
//!
//! This crate holds the pieces everything else in the workspace builds on:
//! an explicit success/failure value, the rule for describing failures as
//! text, and the error type used when a contract is broken.
//!
//! ## Key Components
//!
//! - **`outcome`**: the [`Outcome`] sum type, its combinators, and the
//!   [`sequence`]/[`traverse`] functions for collections of outcomes.
//! - **`describe`**: message-or-kind text for errors and panic payloads.
//! - **`computable`**: [`Computable`], a single-value transformation wrapper.
//! - **`errors`**: the primary [`Error`] enum and [`Result`] alias.
//! - **`constants`**: environment variable names and other shared constants.

pub mod computable;
pub mod constants;
pub mod describe;
pub mod errors;
pub mod outcome;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    computable::Computable,
    constants::*,
    describe::{describe_error, describe_panic},
    errors::{Error, Result, ResultExt},
    outcome::{sequence, traverse, Outcome},
};
