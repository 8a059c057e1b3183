//! Lifting collections of outcomes into an outcome of a collection

use super::Outcome;

/// Collect successes into `V`, stopping at the first failure.
///
/// Items after the first failure are never pulled from the iterator.
impl<S, F, V> FromIterator<Outcome<S, F>> for Outcome<V, F>
where
    V: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        let mut failure = None;
        let values = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}

/// Turn an ordered sequence of outcomes into an outcome of their values.
///
/// Returns the first failure encountered, without looking at anything
/// after it, or every success value in input order.
pub fn sequence<S, F, I>(outcomes: I) -> Outcome<Vec<S>, F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    outcomes.into_iter().collect()
}

/// Apply `mapper` to each item in order and collect the success values.
///
/// Stops at the first failure; later items are never passed to `mapper`.
pub fn traverse<T, S, F, I, M>(items: I, mapper: M) -> Outcome<Vec<S>, F>
where
    I: IntoIterator<Item = T>,
    M: FnMut(T) -> Outcome<S, F>,
{
    items.into_iter().map(mapper).collect()
}
