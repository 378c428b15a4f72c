//! Example demonstrating allocation-free usage of `BitSet`
// #![no_std]

use fixed_bit_set::{BitSet, bit_set};

// Sets are plain arrays, so they can live in statics and constants
const NO_PINS: bit_set!(48, u16) = BitSet::new();

fn vowels() -> bit_set!(26, u32) {
    b"aeiou".iter().map(|&c| usize::from(c - b'a')).collect()
}

fn main() {
    // Everything below runs without an allocator
    let mut pins = NO_PINS;
    pins.insert(3);
    pins.insert(17);
    pins.insert(47);

    // Count set elements
    let count = pins.len();
    // println!("Set pins: {count}");
    core::hint::black_box(count);

    // Iterate without collecting
    let mut sum = 0;
    for pin in &pins {
        sum += pin;
    }
    core::hint::black_box(sum);

    // Whole-set operations work on the inline words
    let mut reserved = NO_PINS;
    reserved.insert_range(0..4);
    let usable = pins - reserved;
    core::hint::black_box(usable.first());

    // Classify letters with a lookup set
    let vowels = vowels();
    let word = b"embedded";
    let count = word
        .iter()
        .filter(|&&c| vowels.contains(usize::from(c - b'a')))
        .count();
    // println!("Vowels in {word:?}: {count}");
    core::hint::black_box(count);

    // Raw words can be stored or sent as-is
    let words: [u16; 3] = pins.into_words();
    let restored = <bit_set!(48, u16)>::from_words(words);
    core::hint::black_box(restored.is_ok());
}
