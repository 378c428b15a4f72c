//! Machine words used to pack the bits of a [`BitSet`](crate::BitSet).
//!
//! Every unsigned integer type can serve as the storage unit. The container
//! only ever talks to its words through [`Word`], which exposes the three
//! bit-scan primitives it relies on (leading-zero count, trailing-zero count,
//! population count) plus the handful of constants needed to build masks.
//!
//! The scans are total: a zero word reports [`Word::BITS`] leading and
//! trailing zeros, so callers never special-case empty words. Whether the
//! count is answered by a single instruction or by a software sequence is
//! left to the compiler for the target; `u128` scans are lowered to two
//! 64-bit scans on every mainstream target.

use core::{
    fmt,
    hash::Hash,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
        ShrAssign,
    },
};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer type that can back a [`BitSet`](crate::BitSet).
///
/// This trait is sealed and implemented for `u8`, `u16`, `u32`, `u64`,
/// `u128` and `usize`.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::Word;
///
/// assert_eq!(<u8 as Word>::BITS, 8);
/// assert_eq!(Word::leading_zeros(0b0001_0000u8), 3);
/// assert_eq!(Word::trailing_zeros(0b0001_0000u8), 4);
///
/// // Zero words report the full width instead of being undefined.
/// assert_eq!(Word::leading_zeros(0u32), 32);
/// assert_eq!(Word::trailing_zeros(0u32), 32);
/// ```
pub trait Word:
    private::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + Send
    + Sync
    + 'static
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + ShlAssign<u32>
    + ShrAssign<u32>
{
    /// Width of the word in bits.
    const BITS: u32;
    /// The word with no bit set.
    const ZERO: Self;
    /// The word with every bit set.
    const ONES: Self;
    /// The word with only the most significant bit set.
    const TOP: Self;

    /// Number of zero bits above the most significant set bit, `BITS` for zero.
    fn leading_zeros(self) -> u32;

    /// Number of zero bits below the least significant set bit, `BITS` for zero.
    fn trailing_zeros(self) -> u32;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Returns `true` if no bit is set.
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;
                const TOP: Self = 1 << (<$ty>::BITS - 1);

                #[inline(always)]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline(always)]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
