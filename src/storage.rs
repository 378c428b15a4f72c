//! Block addressing: where a logical element lives inside the word array.
//!
//! # Layout
//!
//! Elements are grouped into blocks of `W::BITS` consecutive values. Block 0
//! (elements `0..W::BITS`) is stored in the *last* word of the array, block 1
//! in the one before it, and so on, so the first word holds the highest
//! elements. Inside a block the lowest element occupies the most significant
//! bit.
//!
//! ```text
//! N = 20, W = u8, WORDS = 3
//!
//! words[0]            words[1]            words[2]
//! 16 17 18 19 -- -- -- --   8 ... 15            0 1 2 3 4 5 6 7
//! ^MSB        ^padding (always zero)          ^MSB
//! ```
//!
//! Read as one big integer with `words[WORDS - 1]` as the most significant
//! word, element `x` is bit `WORDS * W::BITS - 1 - x`. Comparing the words
//! from the back therefore visits elements in ascending order, and moving
//! every element up by `n` is a plain right shift of that integer.

use crate::Word;

/// Returns the number of `W` words needed to hold `n` elements.
///
/// This is the value expected for the `WORDS` parameter of
/// [`BitSet`](crate::BitSet).
///
/// # Examples
///
/// ```
/// use fixed_bit_set::word_count;
///
/// assert_eq!(word_count::<u8>(0), 0);
/// assert_eq!(word_count::<u8>(8), 1);
/// assert_eq!(word_count::<u8>(9), 2);
/// assert_eq!(word_count::<u64>(129), 3);
/// ```
#[must_use]
pub const fn word_count<W: Word>(n: usize) -> usize {
    n.div_ceil(W::BITS as usize)
}

/// Splits element `x` into `(block, offset)`.
///
/// `block` counts from the element-0 end of the array; `offset` is the
/// distance from the most significant bit of that block's word.
#[inline(always)]
pub(crate) const fn block_offset<W: Word>(x: usize, words: usize) -> (usize, u32) {
    if words == 1 {
        (0, x as u32)
    } else {
        let bits = W::BITS as usize;
        (x / bits, (x % bits) as u32)
    }
}

/// Index into the word array of the word holding `block`.
#[inline(always)]
pub(crate) const fn word_index(block: usize, words: usize) -> usize {
    words - 1 - block
}

/// The single-bit mask for `offset` within its word.
#[inline(always)]
pub(crate) fn bit_mask<W: Word>(offset: u32) -> W {
    W::TOP >> offset
}

/// Maps element `x` to `(word index, single-bit mask)`.
#[inline(always)]
pub(crate) fn locate<W: Word>(x: usize, words: usize) -> (usize, W) {
    let (block, offset) = block_offset::<W>(x, words);
    (word_index(block, words), bit_mask(offset))
}

/// Number of bits past element `n - 1` in the highest block.
#[inline(always)]
pub(crate) const fn padding_bits<W: Word>(n: usize, words: usize) -> u32 {
    (words * W::BITS as usize - n) as u32
}

/// Mask of the bits of `words[0]` that hold real elements.
///
/// Every bit outside this mask is padding and must stay zero.
#[inline(always)]
pub(crate) fn used_mask<W: Word>(n: usize, words: usize) -> W {
    W::ONES << padding_bits::<W>(n, words)
}

/// Mask of the bits strictly below `offset` in block order, i.e. the
/// elements of a block that come before the one at `offset`.
#[inline(always)]
pub(crate) fn before_mask<W: Word>(offset: u32) -> W {
    if offset == 0 {
        W::ZERO
    } else {
        W::ONES << (W::BITS - offset)
    }
}
