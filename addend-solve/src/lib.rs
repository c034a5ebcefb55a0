pub mod check;
mod strategy;

pub use strategy::{BruteForce, HashLookup, SortedTwoPointer, ValueCount};
