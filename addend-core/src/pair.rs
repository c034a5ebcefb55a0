use std::cmp::Ordering;

use thiserror::Error;

/// An unordered pair of two distinct positions in a sequence.
///
/// The pair is stored with the smaller position first, so two `IndexPair`s
/// built from the same positions in either order compare equal. The two
/// positions are guaranteed distinct: an element cannot pair with itself,
/// even when the value it holds appears elsewhere in the sequence.
///
/// # Examples
///
/// ```
/// use addend_core::IndexPair;
///
/// let pair = IndexPair::new(4, 1).unwrap();
/// assert_eq!(pair.lower(), 1);
/// assert_eq!(pair.upper(), 4);
/// assert_eq!(pair, IndexPair::new(1, 4).unwrap());
///
/// assert!(IndexPair::new(3, 3).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct IndexPair {
    lower: usize,
    upper: usize,
}

impl IndexPair {
    /// Constructs a new `IndexPair` if the two positions are distinct.
    ///
    /// Returns `None` when `i == j`.
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            Ordering::Less => Some(Self { lower: i, upper: j }),
            Ordering::Greater => Some(Self { lower: j, upper: i }),
            Ordering::Equal => None,
        }
    }

    /// The smaller of the two positions.
    #[must_use]
    pub fn lower(self) -> usize {
        self.lower
    }

    /// The larger of the two positions.
    #[must_use]
    pub fn upper(self) -> usize {
        self.upper
    }

    /// Consumes the pair and returns `(lower, upper)`.
    #[must_use]
    pub fn into_inner(self) -> (usize, usize) {
        (self.lower, self.upper)
    }
}

impl TryFrom<(usize, usize)> for IndexPair {
    type Error = PairError;

    fn try_from(positions: (usize, usize)) -> Result<Self, Self::Error> {
        let (i, j) = positions;
        Self::new(i, j).ok_or(PairError::NotDistinct(i))
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        pair.into_inner()
    }
}

/// Errors that can occur when constructing an [`IndexPair`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PairError {
    /// Both positions were the same index.
    #[error("positions are not distinct: both are {0}")]
    NotDistinct(usize),
}

/// An unordered pair of two values drawn from a sequence.
///
/// Unlike [`IndexPair`], the two values may be equal: a sequence that
/// contains the same value at least twice can pair that value with itself.
/// The pair is stored with the smaller value first, so construction order
/// does not affect equality.
///
/// # Examples
///
/// ```
/// use addend_core::ValuePair;
///
/// let pair = ValuePair::new(7, 2);
/// assert_eq!(pair.smaller(), &2);
/// assert_eq!(pair.larger(), &7);
/// assert_eq!(pair, ValuePair::new(2, 7));
///
/// let twins = ValuePair::new(3, 3);
/// assert_eq!(twins.into_inner(), (3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuePair<T> {
    smaller: T,
    larger: T,
}

impl<T: Ord> ValuePair<T> {
    /// Creates a new `ValuePair`, storing the smaller value first.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self {
                smaller: a,
                larger: b,
            }
        } else {
            Self {
                smaller: b,
                larger: a,
            }
        }
    }
}

impl<T> ValuePair<T> {
    /// The smaller of the two values.
    #[must_use]
    pub fn smaller(&self) -> &T {
        &self.smaller
    }

    /// The larger of the two values.
    #[must_use]
    pub fn larger(&self) -> &T {
        &self.larger
    }

    /// Consumes the pair and returns `(smaller, larger)`.
    #[must_use]
    pub fn into_inner(self) -> (T, T) {
        (self.smaller, self.larger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_pair_normalizes_order() {
        let pair = IndexPair::new(5, 2).unwrap();
        assert_eq!(pair.lower(), 2);
        assert_eq!(pair.upper(), 5);
        assert_eq!(pair, IndexPair::new(2, 5).unwrap());
        assert_eq!(pair.into_inner(), (2, 5));
    }

    #[test]
    fn index_pair_rejects_equal_positions() {
        assert!(IndexPair::new(0, 0).is_none());
        assert!(matches!(
            IndexPair::try_from((7, 7)),
            Err(PairError::NotDistinct(7))
        ));
    }

    #[test]
    fn index_pair_round_trips_through_tuple() {
        let pair = IndexPair::try_from((9, 4)).unwrap();
        let positions: (usize, usize) = pair.into();
        assert_eq!(positions, (4, 9));
    }

    #[test]
    fn value_pair_normalizes_order() {
        assert_eq!(ValuePair::new(7, 2), ValuePair::new(2, 7));
        assert_eq!(ValuePair::new(7, 2).into_inner(), (2, 7));
    }

    #[test]
    fn value_pair_allows_equal_values() {
        let twins = ValuePair::new(3, 3);
        assert_eq!(twins.smaller(), twins.larger());
        assert_eq!(twins.into_inner(), (3, 3));
    }
}
