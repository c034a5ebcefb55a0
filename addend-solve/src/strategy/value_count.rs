use std::{collections::HashMap, hash::Hash, ops::Sub};

use addend_core::{Solver, ValuePair};

/// Finds a pair of values, not positions, using occurrence counts.
///
/// A first pass counts how often each value occurs; a second pass walks the
/// sequence in its original order looking for a value whose complement is
/// present. A value may pair with itself only when it occurs at least
/// twice. Linear time, linear space.
pub struct ValueCount;

impl<T> Solver<T> for ValueCount
where
    T: Sub<Output = T> + Eq + Hash + Ord + Copy,
{
    type Pair = ValuePair<T>;

    fn solve(&self, values: &[T], target: T) -> Option<Self::Pair> {
        let mut counts: HashMap<T, usize> = HashMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        for &value in values {
            let complement = target - value;
            match counts.get(&complement) {
                Some(&count) if complement == value && count < 2 => continue,
                Some(_) => return Some(ValuePair::new(value, complement)),
                None => {}
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_values_rather_than_positions() {
        assert_eq!(
            ValueCount.solve(&[2, 7, 11, 15], 9),
            Some(ValuePair::new(2, 7))
        );
    }

    #[test]
    fn pairs_a_value_with_itself_when_it_occurs_twice() {
        assert_eq!(ValueCount.solve(&[3, 3], 6), Some(ValuePair::new(3, 3)));
    }

    #[test]
    fn skips_a_lone_value_that_is_its_own_complement() {
        // 4 would need a second 4 to reach 8; the scan moves on and pairs
        // 3 with 5 instead.
        assert_eq!(
            ValueCount.solve(&[4, 3, 5], 8),
            Some(ValuePair::new(3, 5))
        );
    }

    #[test]
    fn returns_none_for_a_lone_self_complement() {
        assert_eq!(ValueCount.solve(&[1, 4, 6], 8), None);
    }

    #[test]
    fn returns_none_when_no_pair_hits_target() {
        assert_eq!(ValueCount.solve(&[1, 2, 3, 4, 5], 10), None);
    }

    #[test]
    fn short_sequences_never_pair() {
        assert_eq!(ValueCount.solve(&[], 0), None);
        assert_eq!(ValueCount.solve(&[3], 6), None);
    }
}
