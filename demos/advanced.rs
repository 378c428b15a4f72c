//! Advanced usage patterns: shifts, cursors and parsing

use fixed_bit_set::{ParseBitSetError, bit_set};

const LIMIT: usize = 100;
type Numbers = bit_set!(LIMIT);

/// Sieve of Eratosthenes driven by whole-set shifts.
fn primes() -> Numbers {
    let mut candidates = Numbers::new();
    candidates.fill();
    candidates.erase_range(..2);

    let mut p = 2;
    while p * p < LIMIT {
        // multiples of p from p * p upward
        let mut multiples = Numbers::new();
        let mut step: Numbers = [p * p].into();
        while !step.is_empty() {
            multiples |= step;
            step <<= p;
        }
        candidates -= multiples;
        p = candidates.upper_bound(p).position();
    }
    candidates
}

fn main() -> Result<(), ParseBitSetError> {
    println!("=== BitSet Advanced Features ===\n");

    let primes = primes();
    println!("Primes below {LIMIT}: {primes:?}");
    println!("Count: {}\n", primes.len());

    // Twin primes: p such that p + 2 is also prime
    let twins = primes & (primes >> 2);
    println!("Twin prime starts: {twins:?}\n");

    // Cursor walk between bounds
    println!("Primes in 30..=60 via cursors:");
    let mut cursor = primes.lower_bound(30);
    let stop = primes.upper_bound(60);
    while cursor != stop {
        print!(" {}", cursor.value());
        cursor.move_next();
    }
    println!("\n");

    // Reverse walk
    print!("Five largest:");
    let mut rcursor = primes.rbegin();
    for _ in 0..5 {
        print!(" {}", rcursor.value());
        rcursor.move_next();
    }
    println!("\n");

    // Gaps between consecutive primes
    let gaps: Vec<usize> = primes
        .iter()
        .zip(primes.iter().skip(1))
        .map(|(a, b)| b - a)
        .collect();
    println!("Gaps: {gaps:?}\n");

    // Parsing and formatting
    let flags: bit_set!(12, u16) = "0b1000_0010_0001".parse()?;
    println!("Parsed flags: {flags:?} ({flags:#b})");

    match "0b1_0000_0000_0000".parse::<bit_set!(12, u16)>() {
        Ok(set) => println!("Unexpected: {set:?}"),
        Err(err) => println!("Rejected: {err}"),
    }

    // Raw storage view
    println!("Raw words of flags: {:?}", flags.as_words());

    Ok(())
}
