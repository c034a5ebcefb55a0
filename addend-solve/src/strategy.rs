mod brute_force;
mod hash_lookup;
mod sorted_two_pointer;
mod value_count;

pub use brute_force::BruteForce;
pub use hash_lookup::HashLookup;
pub use sorted_two_pointer::SortedTwoPointer;
pub use value_count::ValueCount;
