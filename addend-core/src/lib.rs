mod pair;
mod solver;

pub use pair::{IndexPair, PairError, ValuePair};
pub use solver::Solver;
