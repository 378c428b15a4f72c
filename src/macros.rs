/// Spells out the [`BitSet`](crate::BitSet) type for a capacity and word type.
///
/// `bit_set!(N)` uses `u64` words; `bit_set!(N, W)` picks the word type.
/// The word count parameter is filled in with
/// [`word_count`](crate::word_count).
///
/// # Examples
///
/// ```
/// use fixed_bit_set::{BitSet, bit_set, word_count};
///
/// type Primes = bit_set!(16, u8);
/// let primes: Primes = [2, 3, 5, 7, 11, 13].into();
/// assert_eq!(primes.len(), 6);
///
/// let same: BitSet<16, { word_count::<u8>(16) }, u8> = primes;
/// assert_eq!(same, primes);
///
/// let wide = <bit_set!(200)>::new();
/// assert!(wide.is_empty());
/// assert_eq!(<bit_set!(200)>::capacity(), 256);
/// ```
#[macro_export]
macro_rules! bit_set {
    ($n:expr) => {
        $crate::BitSet<{ $n }, { $crate::word_count::<u64>($n) }, u64>
    };
    ($n:expr, $w:ty) => {
        $crate::BitSet<{ $n }, { $crate::word_count::<$w>($n) }, $w>
    };
}

/// Implements a binary operator for owned and borrowed operands on top of
/// the matching compound-assignment operator.
macro_rules! forward_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<const N: usize, const WORDS: usize, W: Word> $op for BitSet<N, WORDS, W> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                $assign::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl<const N: usize, const WORDS: usize, W: Word> $op<&BitSet<N, WORDS, W>>
            for &BitSet<N, WORDS, W>
        {
            type Output = BitSet<N, WORDS, W>;

            #[inline]
            fn $method(self, rhs: &BitSet<N, WORDS, W>) -> Self::Output {
                let mut nrv = *self;
                $assign::$assign_method(&mut nrv, rhs);
                nrv
            }
        }

        impl<const N: usize, const WORDS: usize, W: Word> $assign for BitSet<N, WORDS, W> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                $assign::$assign_method(self, &rhs);
            }
        }
    };
}

pub(crate) use forward_binop;
