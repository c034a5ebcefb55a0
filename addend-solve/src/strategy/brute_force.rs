use std::ops::Add;

use addend_core::{IndexPair, Solver};

/// Finds a pair by exhaustively checking every combination of two positions.
///
/// The scan visits pairs in lexicographic `(i, j)` order with `i < j`, so
/// when several pairs hit the target the one with the smallest `(i, j)`
/// under that order wins. Quadratic time, constant extra space.
pub struct BruteForce;

impl<T> Solver<T> for BruteForce
where
    T: Add<Output = T> + PartialEq + Copy,
{
    type Pair = IndexPair;

    fn solve(&self, values: &[T], target: T) -> Option<Self::Pair> {
        for (i, &first) in values.iter().enumerate() {
            for (j, &second) in values.iter().enumerate().skip(i + 1) {
                if first + second == target {
                    return IndexPair::new(i, j);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_pair_in_scan_order() {
        // Both (0, 3) and (1, 2) sum to 5; the outer-then-inner scan
        // reaches (0, 3) first.
        assert_eq!(BruteForce.solve(&[1, 2, 3, 4], 5), IndexPair::new(0, 3));
    }

    #[test]
    fn returns_none_when_no_pair_hits_target() {
        assert_eq!(BruteForce.solve(&[1, 2, 3, 4, 5], 10), None);
    }

    #[test]
    fn short_sequences_never_pair() {
        assert_eq!(BruteForce.solve(&[], 0), None);
        assert_eq!(BruteForce.solve(&[5], 10), None);
    }

    #[test]
    fn pairs_duplicate_values_at_distinct_positions() {
        assert_eq!(BruteForce.solve(&[3, 3], 6), IndexPair::new(0, 1));
    }

    #[test]
    fn works_with_negative_values() {
        assert_eq!(BruteForce.solve(&[-4, 2, 9, -5], -9), IndexPair::new(0, 3));
    }
}
