use std::{
    fmt,
    hash::Hash,
    ops::{Add, Sub},
};

use thiserror::Error;

use addend_core::{IndexPair, Solver, ValuePair};

use crate::{BruteForce, HashLookup, SortedTwoPointer, ValueCount};

/// Names the strategies for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BruteForce,
    HashLookup,
    SortedTwoPointer,
    ValueCount,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BruteForce => "brute force",
            Self::HashLookup => "hash lookup",
            Self::SortedTwoPointer => "sorted two-pointer",
            Self::ValueCount => "value count",
        };
        f.write_str(name)
    }
}

/// The outcome of running every strategy on the same query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub brute_force: Option<IndexPair>,
    pub hash_lookup: Option<IndexPair>,
    pub sorted_two_pointer: Option<IndexPair>,
    pub value_count: Option<ValuePair<T>>,
}

impl<T> Comparison<T> {
    /// Whether every strategy produced the same found/not-found answer.
    ///
    /// Strategies are free to disagree on which pair they return when
    /// several exist; they must never disagree on whether one exists.
    #[must_use]
    pub fn agrees_on_existence(&self) -> bool {
        let found = self.brute_force.is_some();
        self.hash_lookup.is_some() == found
            && self.sorted_two_pointer.is_some() == found
            && self.value_count.is_some() == found
    }

    fn index_results(&self) -> [(Strategy, Option<IndexPair>); 3] {
        [
            (Strategy::BruteForce, self.brute_force),
            (Strategy::HashLookup, self.hash_lookup),
            (Strategy::SortedTwoPointer, self.sorted_two_pointer),
        ]
    }

    fn outcomes(&self) -> [(Strategy, bool); 4] {
        [
            (Strategy::BruteForce, self.brute_force.is_some()),
            (Strategy::HashLookup, self.hash_lookup.is_some()),
            (Strategy::SortedTwoPointer, self.sorted_two_pointer.is_some()),
            (Strategy::ValueCount, self.value_count.is_some()),
        ]
    }
}

/// Errors reported when the strategies violate their shared contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CheckError<T> {
    /// One strategy found a pair while another found none.
    #[error("{found} found a pair but {missing} did not")]
    ExistenceMismatch { found: Strategy, missing: Strategy },

    /// A strategy returned a position outside the sequence.
    #[error("{strategy} returned positions ({i}, {j}) for a sequence of length {len}")]
    PositionOutOfBounds {
        strategy: Strategy,
        i: usize,
        j: usize,
        len: usize,
    },

    /// A strategy returned positions whose values miss the target.
    #[error("{strategy} returned positions ({i}, {j}) but {first} + {second} = {sum}, not {target}")]
    TargetMissed {
        strategy: Strategy,
        i: usize,
        j: usize,
        first: T,
        second: T,
        sum: T,
        target: T,
    },

    /// The value strategy returned values that miss the target.
    #[error("value count returned ({smaller}, {larger}) but their sum is {sum}, not {target}")]
    ValueTargetMissed {
        smaller: T,
        larger: T,
        sum: T,
        target: T,
    },
}

/// Runs every strategy on the same query.
pub fn run_all<T>(values: &[T], target: T) -> Comparison<T>
where
    T: Add<Output = T> + Sub<Output = T> + Eq + Hash + Ord + Copy,
{
    Comparison {
        brute_force: BruteForce.solve(values, target),
        hash_lookup: HashLookup.solve(values, target),
        sorted_two_pointer: SortedTwoPointer.solve(values, target),
        value_count: ValueCount.solve(values, target),
    }
}

/// Runs every strategy and verifies the cross-strategy contract.
///
/// Each returned index pair must address the original sequence and sum to
/// the target, the value pair must sum to the target, and all strategies
/// must agree on whether a pair exists.
///
/// # Errors
///
/// Returns a [`CheckError`] describing the first violation found.
pub fn cross_check<T>(values: &[T], target: T) -> Result<Comparison<T>, CheckError<T>>
where
    T: Add<Output = T> + Sub<Output = T> + Eq + Hash + Ord + Copy,
{
    let comparison = run_all(values, target);

    for (strategy, result) in comparison.index_results() {
        if let Some(pair) = result {
            verify_positions(strategy, pair, values, target)?;
        }
    }

    if let Some(pair) = &comparison.value_count {
        let (smaller, larger) = (*pair.smaller(), *pair.larger());
        let sum = smaller + larger;
        if sum != target {
            return Err(CheckError::ValueTargetMissed {
                smaller,
                larger,
                sum,
                target,
            });
        }
    }

    let outcomes = comparison.outcomes();
    let found = outcomes.iter().find(|(_, found)| *found);
    let missing = outcomes.iter().find(|(_, found)| !*found);
    if let (Some(&(found, _)), Some(&(missing, _))) = (found, missing) {
        return Err(CheckError::ExistenceMismatch { found, missing });
    }

    Ok(comparison)
}

fn verify_positions<T>(
    strategy: Strategy,
    pair: IndexPair,
    values: &[T],
    target: T,
) -> Result<(), CheckError<T>>
where
    T: Add<Output = T> + Eq + Copy,
{
    let (i, j) = pair.into_inner();
    match (values.get(i), values.get(j)) {
        (Some(&first), Some(&second)) => {
            let sum = first + second;
            if sum == target {
                Ok(())
            } else {
                Err(CheckError::TargetMissed {
                    strategy,
                    i,
                    j,
                    first,
                    second,
                    sum,
                    target,
                })
            }
        }
        _ => Err(CheckError::PositionOutOfBounds {
            strategy,
            i,
            j,
            len: values.len(),
        }),
    }
}
