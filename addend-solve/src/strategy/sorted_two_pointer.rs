use std::{cmp::Ordering, ops::Add};

use addend_core::{IndexPair, Solver};

/// Finds a pair by sorting a copy of the values and converging two cursors.
///
/// An auxiliary vector of `(value, original position)` tuples is sorted
/// ascending by value, with ties broken by position. Cursors start at both
/// ends of the sorted view and walk inward: a sum below the target advances the left cursor, a sum above it
/// retreats the right cursor, and a hit reports the two original
/// positions. The caller's slice is left untouched. Linearithmic time,
/// linear space.
pub struct SortedTwoPointer;

impl<T> Solver<T> for SortedTwoPointer
where
    T: Add<Output = T> + Ord + Copy,
{
    type Pair = IndexPair;

    fn solve(&self, values: &[T], target: T) -> Option<Self::Pair> {
        let mut indexed: Vec<(T, usize)> = values.iter().copied().zip(0..).collect();
        indexed.sort_unstable();

        let mut left = 0;
        let mut right = indexed.len().checked_sub(1)?;

        while left < right {
            let (left_value, left_position) = indexed[left];
            let (right_value, right_position) = indexed[right];

            match (left_value + right_value).cmp(&target) {
                Ordering::Equal => return IndexPair::new(left_position, right_position),
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_positions_in_the_original_sequence() {
        // Sorted order is [1, 2, 4, 5]; the hit on 5 + 1 must map back to
        // the unsorted positions.
        let values = [5, 1, 4, 2];
        let pair = SortedTwoPointer.solve(&values, 6).unwrap();
        assert_eq!(values[pair.lower()] + values[pair.upper()], 6);
        assert_eq!(pair, IndexPair::new(0, 1).unwrap());
    }

    #[test]
    fn finds_pair_in_already_sorted_sequence() {
        assert_eq!(
            SortedTwoPointer.solve(&[1, 2, 3, 4, 5], 8),
            IndexPair::new(2, 4)
        );
    }

    #[test]
    fn pairs_duplicate_values_deterministically() {
        // Ties sort by original position, so the duplicated 3s keep their
        // input order in the sorted view.
        assert_eq!(SortedTwoPointer.solve(&[3, 3], 6), IndexPair::new(0, 1));
    }

    #[test]
    fn returns_none_when_no_pair_hits_target() {
        assert_eq!(SortedTwoPointer.solve(&[1, 2, 3, 4, 5], 10), None);
    }

    #[test]
    fn short_sequences_never_pair() {
        assert_eq!(SortedTwoPointer.solve(&[], 3), None);
        assert_eq!(SortedTwoPointer.solve(&[3], 6), None);
    }

    #[test]
    fn leaves_the_input_unchanged() {
        let values = [9, 1, 8, 2, 7];
        let _ = SortedTwoPointer.solve(&values, 10);
        assert_eq!(values, [9, 1, 8, 2, 7]);
    }
}
