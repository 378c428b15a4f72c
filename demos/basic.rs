//! Basic usage examples for `BitSet`

use fixed_bit_set::bit_set;

type Lanes = bit_set!(100);

fn main() {
    println!("=== BitSet Basic Usage ===\n");

    // Create a new empty set
    let mut set = Lanes::new();
    println!("Created new set");
    println!("Capacity: {} elements", Lanes::max_size());
    println!("Storage: {} bits\n", Lanes::capacity());

    // Insert some elements
    for x in [5, 10, 15, 99] {
        set.insert(x);
    }
    println!("Inserted 5, 10, 15, 99");
    println!("Number of elements: {}", set.len());
    println!("Set: {set:?}\n");

    // Membership
    println!("Checking individual elements:");
    for x in [0, 5, 10, 15, 20, 99] {
        println!(
            "  {x}: {}",
            if set.contains(x) { "present" } else { "absent" }
        );
    }
    println!();

    // Ordered access
    println!("Smallest: {}", set.front());
    println!("Largest: {}", set.back());
    println!("First >= 11: {}", set.lower_bound(11).value());
    println!("First > 15: {}", set.upper_bound(15).value());
    println!("Elements below 12: {}\n", set.rank(12));

    // Iteration in both directions
    println!("Ascending: {:?}", set.iter().collect::<Vec<_>>());
    println!("Descending: {:?}\n", set.iter().rev().collect::<Vec<_>>());

    // Removal and toggling
    set.remove(10);
    let was_present = set.toggle(50);
    println!("After removing 10 and toggling 50 (was present: {was_present}): {set:?}");

    // Fill and clear
    set.fill();
    println!("After fill: {} elements, full = {}", set.len(), set.is_full());
    set.clear();
    println!("After clear: empty = {}", set.is_empty());
}
