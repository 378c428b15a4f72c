//! Demonstrates set operations with `BitSet`
#![allow(clippy::many_single_char_names)]

use fixed_bit_set::{bit_set, is_proper_subset_of};

type Set = bit_set!(16, u8);

fn main() {
    println!("=== BitSet Set Operations ===\n");

    let a: Set = [1, 2, 3, 5, 8].into();
    let b: Set = [2, 3, 5, 7, 11].into();

    println!("Set A: {a:?}");
    println!("Set B: {b:?}");
    println!();

    // Union (A ∪ B)
    println!("Union (A ∪ B): {:?}", a | b);
    println!("Expected: {{1, 2, 3, 5, 7, 8, 11}}\n");

    // Intersection (A ∩ B)
    println!("Intersection (A ∩ B): {:?}", a & b);
    println!("Expected: {{2, 3, 5}}\n");

    // Difference (A - B)
    println!("Difference (A - B): {:?}", a - b);
    println!("Expected: {{1, 8}}\n");

    // Symmetric difference (A △ B)
    println!("Symmetric difference (A △ B): {:?}", a ^ b);
    println!("Expected: {{1, 7, 8, 11}}\n");

    // Complement within 0..16
    println!("Complement of A: {:?}\n", !a);

    // Relations
    let c: Set = [2, 3].into();
    println!("C: {c:?}");
    println!("C ⊆ A: {}", c.is_subset(&a));
    println!("C ⊂ A: {}", is_proper_subset_of(&c, &a));
    println!("A ⊇ C: {}", a.is_superset(&c));
    println!("A and B intersect: {}", a.intersects(&b));
    println!("A and {{12}} disjoint: {}\n", a.is_disjoint(&[12].into()));

    // Lexicographic ordering, like BTreeSet
    let mut sets = [b, a, c, Set::new()];
    sets.sort();
    println!("Sorted: {sets:?}");

    // Binary form: element 0 is the rightmost digit
    println!("A as binary: {a:#b}");
}
