use addend_core::{Solver, ValuePair};
use addend_solve::ValueCount;

fn main() {
    println!("====== Pairing a value with itself ======");

    // A value can pair with itself only when it occurs at least twice.
    let pair = ValueCount.solve(&[3, 3], 6);
    assert_eq!(pair, Some(ValuePair::new(3, 3)));
    report(&[3, 3], 6, pair);

    let pair = ValueCount.solve(&[1, 4, 6], 8);
    assert_eq!(pair, None);
    report(&[1, 4, 6], 8, pair);

    println!("\n====== Distinct values still win ======");

    // The lone 4 cannot double itself, but 3 and 5 reach the target.
    let pair = ValueCount.solve(&[4, 3, 5], 8);
    assert_eq!(pair, Some(ValuePair::new(3, 5)));
    report(&[4, 3, 5], 8, pair);
}

fn report(values: &[i64], target: i64, result: Option<ValuePair<i64>>) {
    match result {
        Some(pair) => println!(
            "{values:?} with target {target}: values ({}, {})",
            pair.smaller(),
            pair.larger()
        ),
        None => println!("{values:?} with target {target}: no pair"),
    }
}
