//! A fixed-capacity ordered set of small integers, packed one bit per element.
//!
//! This crate provides [`BitSet<N, WORDS, W>`](BitSet), a set of the integers
//! `0..N` stored inline in an array of unsigned words. It combines the
//! interface of a sorted set (ordered iteration, bidirectional cursors,
//! `lower_bound`/`upper_bound`, lexicographic comparison) with the
//! word-parallel algebra of a bitset.
//!
//! # Features
//!
//! - **No allocation**: the storage is a plain `[W; WORDS]`, and the set is
//!   `Copy` and usable in `const` contexts
//! - **Ordered set interface**: [`Cursor`], [`ReverseCursor`], [`Ref`],
//!   `find`, `lower_bound`, `upper_bound`, `equal_range`
//! - **Whole-set algebra**: `&`, `|`, `^`, `-`, `!` and the element shifts
//!   `<<` and `>>`, all in O(`WORDS`)
//! - **Relational predicates**: subset, superset, proper variants,
//!   intersection tests
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support**
//!
//! # Examples
//!
//! ```
//! use fixed_bit_set::bit_set;
//!
//! // Primes below 32
//! let mut primes = <bit_set!(32, u8)>::new();
//! primes.insert_range([2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]);
//!
//! // Ordered lookups
//! assert_eq!(primes.lower_bound(20).value(), 23);
//! assert_eq!(primes.iter().rev().take(2).collect::<Vec<_>>(), [31, 29]);
//!
//! // Twin primes: p such that p + 2 is also prime
//! let twins = primes & (primes >> 2);
//! assert_eq!(twins.iter().collect::<Vec<_>>(), [3, 5, 11, 17, 29]);
//! ```
//!
//! # Storage Layout
//!
//! Element `x` lives in block `x / W::BITS`. Blocks are stored in reverse
//! order, so the last word holds elements `0..W::BITS`, and within a block
//! the lowest element is the most significant bit. The unused high-end
//! bits of the first word are kept at zero. See [`storage`] for details.
//!
//! # Choosing `WORDS`
//!
//! Stable Rust cannot compute the word count from `N` inside a type, so it
//! is spelled as a second parameter. The [`bit_set!`] macro fills it in:
//! `bit_set!(100)` is `BitSet<100, 2, u64>` and `bit_set!(100, u8)` is
//! `BitSet<100, 13, u8>`.
//!
//! # Performance
//!
//! - Insertion, removal and membership are O(1)
//! - Size, scans, algebra, comparison and shifts are O(`WORDS`)
//! - Single-word and two-word sets take branch-free paths for size,
//!   emptiness and the algebra

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "rkyv")]
extern crate alloc;

// Module declarations
mod bitset;
mod iter;
mod macros;
mod set_ops;
pub mod storage;
pub mod traits;
mod word;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use self::rkyv::{ArchivedBitSet, BitSetResolver};

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bitset::BitSet;
pub use iter::{Cursor, IntoIter, Iter, Ref, ReverseCursor};
pub use set_ops::{
    disjoint, intersects, is_proper_subset_of, is_proper_superset_of, is_subset_of,
    is_superset_of,
};
pub use storage::word_count;
pub use traits::{CapacityError, ParseBitSetError};
pub use word::Word;
