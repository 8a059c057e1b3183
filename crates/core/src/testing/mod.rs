//! Property-based testing utilities for outcomes
//!
//! The generators are available to other crates through the `testing`
//! feature; the law checks below run as this crate's own tests.

use crate::outcome::Outcome;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Generate an outcome that is a success or a failure with equal odds
    pub fn outcome<S, F>(
        success: impl Strategy<Value = S> + 'static,
        failure: impl Strategy<Value = F> + 'static,
    ) -> impl Strategy<Value = Outcome<S, F>>
    where
        S: std::fmt::Debug + 'static,
        F: std::fmt::Debug + 'static,
    {
        prop_oneof![
            success.prop_map(Outcome::<S, F>::success),
            failure.prop_map(Outcome::<S, F>::failure),
        ]
    }

    /// Generate small integer outcomes with short string errors
    pub fn int_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
        outcome(-1000i32..1000, "[a-z]{1,12}")
    }

    /// Generate outcomes whose payloads may be absent
    pub fn optional_outcome() -> impl Strategy<Value = Outcome<Option<i32>, Option<String>>> {
        outcome(
            proptest::option::of(-1000i32..1000),
            proptest::option::of("[a-z]{1,12}"),
        )
    }

    /// Generate lists of outcomes for testing `sequence`
    pub fn outcome_list() -> impl Strategy<Value = Vec<Outcome<i32, String>>> {
        vec(int_outcome(), 0..32)
    }
}
