use addend_core::{IndexPair, Solver, ValuePair};
use addend_solve::{BruteForce, HashLookup, SortedTwoPointer, check::run_all};

fn main() {
    let cases: [(&[i64], i64); 5] = [
        (&[2, 7, 11, 15], 9),
        (&[3, 2, 4], 6),
        (&[3, 3], 6),
        (&[1, 2, 3, 4, 5], 8),
        (&[1, 2, 3, 4, 5], 10),
    ];

    for (number, (values, target)) in cases.into_iter().enumerate() {
        println!("\n====== Case {} ======", number + 1);
        println!("values = {values:?}, target = {target}");

        let comparison = run_all(values, target);
        print_index_result("brute force", comparison.brute_force);
        print_index_result("hash lookup", comparison.hash_lookup);
        print_index_result("two-pointer", comparison.sorted_two_pointer);
        print_value_result("value count", comparison.value_count);

        println!(
            "  {:<12} = {}",
            "all agree",
            comparison.agrees_on_existence()
        );
    }

    // The first three cases are built to have a unique answer.
    assert_eq!(BruteForce.solve(&[2, 7, 11, 15], 9), IndexPair::new(0, 1));
    assert_eq!(HashLookup.solve(&[3, 2, 4], 6), IndexPair::new(1, 2));
    assert_eq!(SortedTwoPointer.solve(&[3, 3], 6), IndexPair::new(0, 1));
}

/// Prints a labeled position pair, or "no pair" when nothing was found.
fn print_index_result(label: &str, result: Option<IndexPair>) {
    match result {
        Some(pair) => println!(
            "  {label:<12} = positions ({}, {})",
            pair.lower(),
            pair.upper()
        ),
        None => println!("  {label:<12} = no pair"),
    }
}

/// Prints a labeled value pair, or "no pair" when nothing was found.
fn print_value_result(label: &str, result: Option<ValuePair<i64>>) {
    match result {
        Some(pair) => println!(
            "  {label:<12} = values ({}, {})",
            pair.smaller(),
            pair.larger()
        ),
        None => println!("  {label:<12} = no pair"),
    }
}
