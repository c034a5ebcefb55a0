/// A strategy for finding two elements of a sequence that sum to a target.
///
/// Solvers must be deterministic, always producing the same result for a
/// given sequence and target, and must not mutate the sequence they are
/// given. Any working copies a strategy needs, such as a sorted view of the
/// values, are built internally.
///
/// A missing pair is a normal outcome, not a failure: `solve` returns
/// `None` when no two elements sum to the target, including for sequences
/// shorter than two elements.
///
/// When several valid pairs exist, which one is returned is determined by
/// each strategy's own scan order. Strategies are only required to agree on
/// whether a pair exists.
///
/// # Examples
///
/// ```
/// use addend_core::{IndexPair, Solver};
///
/// /// Pairs the first two elements when they hit the target.
/// struct FirstTwo;
///
/// impl Solver<i32> for FirstTwo {
///     type Pair = IndexPair;
///
///     fn solve(&self, values: &[i32], target: i32) -> Option<Self::Pair> {
///         match values {
///             [a, b, ..] if a + b == target => IndexPair::new(0, 1),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(FirstTwo.solve(&[2, 7, 11], 9), IndexPair::new(0, 1));
/// assert_eq!(FirstTwo.solve(&[2, 7, 11], 5), None);
/// ```
pub trait Solver<T> {
    /// The pair representation this strategy produces.
    type Pair;

    /// Searches `values` for two elements that sum to `target`.
    fn solve(&self, values: &[T], target: T) -> Option<Self::Pair>;
}
