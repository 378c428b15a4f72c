//! Trait implementations for `BitSet`.

use core::{
    fmt::{self, Write as _},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use crate::{BitSet, Word, macros::forward_binop};

/// Error returned when an element does not fit in a [`BitSet`].
///
/// Produced by [`BitSet::try_insert`], [`BitSet::from_words`] and the
/// checked conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityError {
    /// The rejected element.
    pub index: usize,
    /// The capacity `N` of the set.
    pub capacity: usize,
}

impl CapacityError {
    #[inline]
    pub(crate) const fn new(index: usize, capacity: usize) -> Self {
        Self { index, capacity }
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element {} is out of range for a bit set of capacity {}",
            self.index, self.capacity
        )
    }
}

impl core::error::Error for CapacityError {}

/// Errors that can occur when parsing a binary string into a [`BitSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitSetError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The byte position of the invalid character
        pos: usize,
    },

    /// Empty string provided.
    Empty,

    /// A `1` digit names an element at or above the capacity.
    OutOfRange(CapacityError),
}

impl fmt::Display for ParseBitSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "invalid character '{ch}' at position {pos} in binary string"
                )
            }
            Self::Empty => write!(f, "cannot parse bit set from empty string"),
            Self::OutOfRange(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ParseBitSetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CapacityError> for ParseBitSetError {
    fn from(err: CapacityError) -> Self {
        Self::OutOfRange(err)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Default for BitSet<N, WORDS, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const WORDS: usize, const K: usize, W: Word> From<[usize; K]>
    for BitSet<N, WORDS, W>
{
    /// Builds a set from a list of elements, each of which must be below
    /// `N`.
    fn from(elems: [usize; K]) -> Self {
        elems.into_iter().collect()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> TryFrom<&[usize]> for BitSet<N, WORDS, W> {
    type Error = CapacityError;

    /// Builds a set from a list of elements, rejecting the first one that
    /// is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let ok = <bit_set!(8, u8)>::try_from(&[1, 4][..]);
    /// assert_eq!(ok.map(|s| s.len()), Ok(2));
    ///
    /// let err = <bit_set!(8, u8)>::try_from(&[1, 8][..]).unwrap_err();
    /// assert_eq!(err.index, 8);
    /// ```
    fn try_from(elems: &[usize]) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for &x in elems {
            set.try_insert(x)?;
        }
        Ok(set)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Debug for BitSet<N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Display for BitSet<N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Binary for BitSet<N, WORDS, W> {
    /// Formats the set as exactly `N` binary digits, element `N - 1` on the
    /// left and element 0 on the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(6, u8) = [0, 2, 5].into();
    /// assert_eq!(format!("{set:b}"), "100101");
    /// assert_eq!(format!("{set:#b}"), "0b100101");
    /// assert_eq!(set.to_string(), "100101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for x in (0..N).rev() {
            f.write_char(if self.contains(x) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<const N: usize, const WORDS: usize, W: Word> FromStr for BitSet<N, WORDS, W> {
    type Err = ParseBitSetError;

    /// Parses a binary string, rightmost digit first.
    ///
    /// The string may start with `0b` and may contain `_` separators. It may
    /// be shorter than `N`; a longer one is accepted as long as every extra
    /// digit is `0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitSetError`] if the string is empty, contains a
    /// character other than `0`, `1` or `_`, or sets an element at or above
    /// `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bit_set::{ParseBitSetError, bit_set};
    ///
    /// let set: bit_set!(8, u8) = "0b1010_0001".parse()?;
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [0, 5, 7]);
    ///
    /// let err = "1_0000_0000".parse::<bit_set!(8, u8)>().unwrap_err();
    /// assert!(matches!(err, ParseBitSetError::OutOfRange(_)));
    /// # Ok::<(), ParseBitSetError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0b").unwrap_or(s).as_bytes();
        if s.is_empty() {
            return Err(ParseBitSetError::Empty);
        }

        let mut set = Self::new();
        let mut x = 0;
        for (pos, &v) in s.iter().enumerate().rev() {
            match v {
                b'1' => {
                    set.try_insert(x)?;
                }
                b'0' => {}
                b'_' => continue,
                _ => {
                    return Err(ParseBitSetError::InvalidChar { ch: v as char, pos });
                }
            }
            x += 1;
        }
        Ok(set)
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl<const N: usize, const WORDS: usize, W: Word> BitAndAssign<&Self> for BitSet<N, WORDS, W> {
    /// Keeps only the elements present in both sets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut a: bit_set!(8, u8) = [0, 1].into();
    /// let b: bit_set!(8, u8) = [1, 2].into();
    ///
    /// a &= &b;
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [1]);
    /// ```
    #[inline]
    fn bitand_assign(&mut self, rhs: &Self) {
        self.intersection_with(rhs);
    }
}

impl<const N: usize, const WORDS: usize, W: Word> BitOrAssign<&Self> for BitSet<N, WORDS, W> {
    #[inline]
    fn bitor_assign(&mut self, rhs: &Self) {
        self.union_with(rhs);
    }
}

impl<const N: usize, const WORDS: usize, W: Word> BitXorAssign<&Self> for BitSet<N, WORDS, W> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.symmetric_difference_with(rhs);
    }
}

impl<const N: usize, const WORDS: usize, W: Word> SubAssign<&Self> for BitSet<N, WORDS, W> {
    /// Removes the elements of `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let a: bit_set!(8, u8) = [0, 1, 5].into();
    /// let b: bit_set!(8, u8) = [1, 2].into();
    ///
    /// assert_eq!((a - b).iter().collect::<Vec<_>>(), [0, 5]);
    /// ```
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.difference_with(rhs);
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);

impl<const N: usize, const WORDS: usize, W: Word> Not for BitSet<N, WORDS, W> {
    type Output = Self;

    /// Returns the complement within `0..N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(4, u8) = [1].into();
    /// assert_eq!((!set).iter().collect::<Vec<_>>(), [0, 2, 3]);
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.complement();
        self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Not for &BitSet<N, WORDS, W> {
    type Output = BitSet<N, WORDS, W>;

    #[inline]
    fn not(self) -> Self::Output {
        !*self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> ShlAssign<usize> for BitSet<N, WORDS, W> {
    /// Adds `n` to every element; see [`BitSet::shift_left`].
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.shift_left(n);
    }
}

impl<const N: usize, const WORDS: usize, W: Word> ShrAssign<usize> for BitSet<N, WORDS, W> {
    /// Subtracts `n` from every element; see [`BitSet::shift_right`].
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.shift_right(n);
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Shl<usize> for BitSet<N, WORDS, W> {
    type Output = Self;

    /// Returns the set with `n` added to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(100) = [0, 63, 90].into();
    /// assert_eq!((set << 10).iter().collect::<Vec<_>>(), [10, 73]);
    /// ```
    #[inline]
    fn shl(mut self, n: usize) -> Self::Output {
        self.shift_left(n);
        self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Shl<usize> for &BitSet<N, WORDS, W> {
    type Output = BitSet<N, WORDS, W>;

    #[inline]
    fn shl(self, n: usize) -> Self::Output {
        *self << n
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Shr<usize> for BitSet<N, WORDS, W> {
    type Output = Self;

    /// Returns the set with `n` subtracted from every element.
    #[inline]
    fn shr(mut self, n: usize) -> Self::Output {
        self.shift_right(n);
        self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Shr<usize> for &BitSet<N, WORDS, W> {
    type Output = BitSet<N, WORDS, W>;

    #[inline]
    fn shr(self, n: usize) -> Self::Output {
        *self >> n
    }
}
