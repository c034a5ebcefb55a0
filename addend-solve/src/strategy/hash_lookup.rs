use std::{collections::HashMap, hash::Hash, ops::Sub};

use addend_core::{IndexPair, Solver};

/// Finds a pair in a single pass using a map from seen values to positions.
///
/// While scanning left to right, each value's complement (`target - value`)
/// is looked up among the values seen so far; a hit pairs the current
/// position with the earliest occurrence of the complement. A value is
/// recorded only on its first occurrence, so the stored position for a
/// duplicated value is always its earliest. Of all valid pairs, this scan
/// returns the one whose second position is smallest. Linear time, linear
/// space.
pub struct HashLookup;

impl<T> Solver<T> for HashLookup
where
    T: Sub<Output = T> + Eq + Hash + Copy,
{
    type Pair = IndexPair;

    fn solve(&self, values: &[T], target: T) -> Option<Self::Pair> {
        let mut seen: HashMap<T, usize> = HashMap::new();

        for (i, &value) in values.iter().enumerate() {
            let complement = target - value;
            if let Some(&earliest) = seen.get(&complement) {
                return IndexPair::new(earliest, i);
            }
            seen.entry(value).or_insert(i);
        }

        None
    }
}
