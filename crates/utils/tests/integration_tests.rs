//! Integration tests for composing outcomes with the adapters
//!
//! These tests parse a small `name=port` listing the way calling code
//! would: wrap fallible parsing with the attempt adapters, chain the
//! results with outcome combinators, and run the whole thing under a
//! safe executor.

use anyhow::{bail, Context};
use proptest::prelude::*;
use std::cell::Cell;
use verdict_core::testing::generators::int_outcome;
use verdict_core::{sequence, traverse, Error, Outcome};
use verdict_utils::{
    attempt, attempt_unwind, attempt_with, ExecutorConfig, SafeCall, SafeExecutor, TracingExecutor,
};

#[derive(Debug, Clone, PartialEq)]
struct Service {
    name: String,
    port: u16,
}

fn parse_line(line: &str) -> anyhow::Result<Service> {
    let Some((name, port)) = line.split_once('=') else {
        bail!("missing '=' in '{line}'");
    };
    let port = port
        .trim()
        .parse::<u16>()
        .with_context(|| format!("bad port for {}", name.trim()))?;
    Ok(Service {
        name: name.trim().to_string(),
        port,
    })
}

fn parse_listing(listing: &str) -> Outcome<Vec<Service>, String> {
    traverse(listing.lines().filter(|l| !l.trim().is_empty()), |line| {
        attempt(|| parse_line(line))
            .validate(|s| s.port >= 1024, |s| format!("{} uses privileged port {}", s.name, s.port))
    })
}

#[test]
fn test_listing_parses_in_order() {
    let services = parse_listing("web=8080\n\ndb = 5432\n");
    assert_eq!(
        services,
        Outcome::success(vec![
            Service {
                name: "web".into(),
                port: 8080
            },
            Service {
                name: "db".into(),
                port: 5432
            },
        ])
    );
}

#[test]
fn test_listing_reports_first_problem_only() {
    let services = parse_listing("web=8080\nssh=22\ncache=oops\n");
    assert_eq!(
        services,
        Outcome::failure("ssh uses privileged port 22".to_string())
    );
}

#[test]
fn test_anyhow_context_is_the_failure_text() {
    let services = parse_listing("cache=oops");
    assert_eq!(services, Outcome::failure("bad port for cache".to_string()));
}

#[test]
fn test_recover_supplies_fallback_listing() {
    let fallback_used = Cell::new(false);
    let services = parse_listing("broken")
        .recover(|_| {
            fallback_used.set(true);
            parse_listing("default=8000")
        })
        .map(|list| list.into_iter().map(|s| s.port).collect::<Vec<_>>());

    assert!(fallback_used.get());
    assert_eq!(services, Outcome::success(vec![8000]));
}

#[test]
fn test_sequence_of_independent_attempts() {
    let ports = ["80", "443", "8443"].map(|raw| attempt(|| raw.parse::<u16>()));
    assert_eq!(sequence(ports), Outcome::success(vec![80, 443, 8443]));
}

#[test]
fn test_executor_wraps_pipeline() {
    let executor = TracingExecutor::new(ExecutorConfig::default());

    let ok = executor.safely("load services", || parse_line("api=9000"));
    assert_eq!(ok.unwrap().port, 9000);

    let err = executor
        .safely("load services", || parse_line("api"))
        .unwrap_err();
    assert!(matches!(err, Error::Execution { .. }));
    assert_eq!(err.to_string(), "load services failed: missing '=' in 'api'");
}

#[test]
fn test_executor_outcome_feeds_combinators() {
    let executor = TracingExecutor::default();
    let port = executor
        .safely_outcome("read port", || parse_line("api=70000"))
        .map(|s| s.port)
        .map_failure(|message| message.len());

    assert!(port.is_failure());
    assert!(port.get_error() > "read port failed: ".len());
}

#[test]
fn test_safe_call_round_trip_through_outcome() {
    let call = || parse_line("worker=7000");
    let outcome = call.to_outcome_with_message();
    let back: Result<Service, String> = outcome.clone().into();
    assert_eq!(Outcome::from(back), outcome);
}

#[test]
fn test_panicking_parser_is_contained() {
    let outcome = attempt_unwind(|| {
        let fields: Vec<&str> = "solo".split(',').collect();
        fields[3].to_string()
    });
    assert!(outcome.is_failure());
    assert!(outcome.get_error().contains("index out of bounds"));
}

#[test]
fn test_attempt_with_typed_errors() {
    #[derive(Debug, PartialEq)]
    enum ListingError {
        Malformed(String),
    }

    let outcome = attempt_with(|| parse_line("nope"), |e| ListingError::Malformed(e.to_string()));
    assert_eq!(
        outcome,
        Outcome::failure(ListingError::Malformed("missing '=' in 'nope'".to_string()))
    );
}

proptest! {
    #[test]
    fn outcome_to_result_and_back_is_lossless(r in int_outcome()) {
        let as_result: Result<i32, String> = r.clone().into();
        prop_assert_eq!(Outcome::from(as_result), r);
    }

    #[test]
    fn attempt_never_loses_a_success(port in 0u16..=u16::MAX) {
        let raw = port.to_string();
        prop_assert_eq!(attempt(|| raw.parse::<u16>()), Outcome::success(port));
    }
}
