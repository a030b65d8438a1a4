//! Working with many attempts at once.

use either::Either;
use itertools::Itertools;

use crate::attempt::Attempt;

/// Collect attempts into a single attempt, stopping at the first failure.
///
/// Items after the first `Failure` are not pulled from the iterator.
///
/// ```
/// use attempt::Attempt;
///
/// let all: Attempt<Vec<i32>, &str> = vec![Attempt::success(1), Attempt::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all, Attempt::Success(vec![1, 2]));
/// ```
impl<T, E, V> FromIterator<Attempt<T, E>> for Attempt<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Attempt<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Attempt::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

/// Split attempts into their values and their failures, keeping every one.
///
/// Both vectors preserve input order.
pub fn partition<T, E, I>(attempts: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Attempt<T, E>>,
{
    attempts
        .into_iter()
        .partition_map(|attempt| match attempt {
            Attempt::Success(value) => Either::Left(value),
            Attempt::Failure(error) => Either::Right(error),
        })
}
